//! Revoked Tokens Entity Module
//!
//! 폐기된 리프레시 토큰 목록의 항목을 정의합니다.

pub mod revoked_token;

pub use revoked_token::RevokedToken;
