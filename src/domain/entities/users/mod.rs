//! Users Entity Module
//!
//! 사용자 계정 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User::new(1, "a@x.com".to_string(), password_hash);
//! assert!(!user.is_chirpy_red);
//! ```

pub mod user;

pub use user::User;
