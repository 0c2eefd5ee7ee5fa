//! # Domain Models Module
//!
//! 저장되지 않는 도메인 값 객체를 정의합니다.
//!
//! ## Entities vs Models 구분
//!
//! ### Entities (`../entities/`)
//! - 스냅샷 파일에 그대로 저장되는 레코드
//! - 고유 식별자(ID 또는 토큰 문자열)를 가짐
//! - **예시**: `Chirp`, `User`, `RevokedToken`
//!
//! ### Models (`./`)
//! - 요청 처리 중에만 존재하는 값
//! - **예시**: `TokenClaims`, `TokenPair`, `AuthenticatedAccount`
//!
//! ## 모듈 구성
//!
//! ```text
//! models/
//! ├── mod.rs     ← 이 파일 (모듈 진입점)
//! ├── token/     ← JWT 클레임, 토큰 종류, 토큰 쌍
//! └── auth/      ← 인증된 요청 주체와 FromRequest 추출자
//! ```

pub mod auth;
pub mod token;

pub use auth::{AuthOutcome, AuthenticatedAccount};
pub use token::{TokenClaims, TokenKind, TokenPair};
