//! 토큰 폐기 목록 리포지토리 모듈
//!
//! 폐기된 리프레시 토큰을 스냅샷 파일의 `revoked_tokens` 컬렉션에 기록합니다.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::repositories::tokens::TokenRepository;
//!
//! let token_repo = TokenRepository::new(store.clone());
//! token_repo.revoke(refresh_token, Utc::now())?;
//! assert!(token_repo.is_revoked(refresh_token)?);
//! ```

pub mod token_repository;

pub use token_repository::TokenRepository;
