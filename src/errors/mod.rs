//! 에러 타입 모듈
//!
//! 애플리케이션 전역 에러(`AppError`)와 토큰 검증 에러(`TokenError`)를 제공합니다.

pub mod errors;

pub use errors::{AppError, AppResult, ErrorContext, TokenError};
