//! 인증 및 보안 서비스 모듈
//!
//! 비밀번호 해싱과 JWT 기반 토큰 인증을 담당하는 서비스들을 제공합니다.
//!
//! # Features
//!
//! - bcrypt 비밀번호 해싱/검증
//! - JWT 액세스(1시간)/리프레시(60일) 토큰 발급
//! - 토큰 검증, 갱신, 리프레시 토큰 폐기
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - `iss` 클레임으로 토큰 종류 구분
//! - 폐기된 리프레시 토큰 영구 차단
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{PasswordService, TokenService};
//!
//! let token_service = TokenService::new(&secret, token_repo);
//! let pair = token_service.issue_pair(&user)?;
//! ```

pub mod password_service;
pub mod token_service;

pub use password_service::PasswordService;
pub use token_service::TokenService;
