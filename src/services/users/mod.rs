//! 사용자 관리 서비스 모듈
//!
//! 사용자 등록, 인증, 계정 정보 수정, 멤버십 관리를 담당합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱
//! - 이메일 중복 방지
//! - 로그인 실패 사유 비공개
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(user_repo, PasswordService::default());
//! let response = user_service.create_user(request)?;
//! ```

pub mod user_service;

pub use user_service::UserService;
