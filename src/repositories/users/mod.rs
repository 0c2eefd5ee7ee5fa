//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`](user_repo::UserRepository)를 통해 스냅샷 파일의
//! `users` 컬렉션을 관리합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let user_repo = UserRepository::new(store.clone());
//! let user = user_repo.find_by_email("user@example.com")?;
//! ```

pub mod user_repo;

pub use user_repo::UserRepository;
