//! 게시글 데이터 액세스 계층
//!
//! ```rust,ignore
//! use crate::repositories::chirps::ChirpRepository;
//!
//! let chirp_repo = ChirpRepository::new(store.clone());
//! let chirp = chirp_repo.create(author_id, body)?;
//! ```

pub mod chirp_repo;

pub use chirp_repo::ChirpRepository;
