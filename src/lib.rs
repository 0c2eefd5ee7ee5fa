//! Chirpy 게시글 서비스
//!
//! 짧은 게시글(chirp)을 작성하고 조회하는 Rust 기반 HTTP 서비스입니다.
//! 모든 레코드는 하나의 JSON 스냅샷 파일에 저장되며, bcrypt 비밀번호와
//! JWT 액세스/리프레시 토큰으로 인증합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 회원가입, 이메일/비밀번호 수정, Chirpy Red 멤버십
//! - **JWT 인증**: 액세스(1시간)/리프레시(60일) 토큰, 리프레시 토큰 폐기
//! - **게시글**: 140자 제한, 욕설 필터, 작성자 본인만 삭제
//! - **문서 저장소**: 원자적 쓰기와 프로세스 내 직렬화를 보장하는 JSON 파일
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트, 인증 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 레코드 접근
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  DocumentStore  │ ← database.json
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use chirpy_service::db::DocumentStore;
//! use chirpy_service::services::ServiceContainer;
//!
//! let store = Arc::new(DocumentStore::initialize("./database.json")?);
//! let services = ServiceContainer::from_env(store)?;
//!
//! let user = services.user_service.verify_password("walt@breakingbad.com", "123456")?;
//! let tokens = services.token_service.issue_pair(&user)?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
