//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 모든 리포지토리는 하나의 `Arc<DocumentStore>`를 공유하며, 각 연산은
//! 스냅샷 읽기 → 변경 → 쓰기 사이클로 동작합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::db::DocumentStore;
//! use crate::repositories::users::UserRepository;
//!
//! let store = Arc::new(DocumentStore::initialize("./database.json")?);
//! let user_repo = UserRepository::new(store.clone());
//! let user = user_repo.find_by_email("user@example.com")?;
//! ```

pub mod chirps;
pub mod tokens;
pub mod users;
