//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 스냅샷 파일에 저장되는 레코드 (Chirp, User, RevokedToken)
//! ├── DTOs      - 데이터 전송 객체 (Request/Response)
//! └── Models    - 요청 처리 중에만 존재하는 값 (토큰 클레임, 인증 주체)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DocumentStore)
//! ```

pub mod dto;
pub mod entities;
pub mod models;

pub use entities::{Chirp, RevokedToken, User};
pub use models::{AuthenticatedAccount, TokenClaims, TokenKind, TokenPair};
