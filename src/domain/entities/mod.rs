//! # Domain Entities Module
//!
//! 스냅샷 파일에 그대로 저장되는 영속 엔티티들을 정의합니다.
//!
//! ```text
//! Snapshot (database.json)
//! ├── chirps          { id → Chirp }
//! ├── users           { id → User }
//! └── revoked_tokens  { token → RevokedToken }
//! ```
//!
//! 엔티티는 순수 데이터이며 저장소 접근이나 검증 로직을 갖지 않습니다.
//! 이메일 유니크 제약, 작성자 소유권 검사 등은 리포지토리 계층의 책임입니다.

pub mod chirps;
pub mod tokens;
pub mod users;

pub use chirps::Chirp;
pub use tokens::RevokedToken;
pub use users::User;
