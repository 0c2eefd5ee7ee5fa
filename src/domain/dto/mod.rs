//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의하며,
//! 엔티티가 그대로 노출되지 않도록 합니다.
//!
//! ## 설계 원칙
//!
//! - **데이터 은닉**: 비밀번호 해시는 어떤 응답에도 포함되지 않습니다.
//! - **입력 검증**: `validator` derive로 필드 규칙을 선언하고,
//!   핸들러에서 `validate()` 실패를 400 응답으로 변환합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── users/      # 회원가입, 계정 수정, 로그인
//! ├── chirps/     # 게시글 작성
//! ├── tokens/     # 액세스 토큰 재발급 응답
//! └── webhooks/   # 결제 제공자 웹훅
//! ```
//!
//! 게시글 응답은 `Chirp` 엔티티의 JSON 형태(`{id, body, author_id}`)를
//! 그대로 사용합니다.

pub mod chirps;
pub mod tokens;
pub mod users;
pub mod webhooks;

pub use chirps::{CreateChirpRequest, MAX_CHIRP_LENGTH};
pub use tokens::RefreshResponse;
pub use users::{CreateUserRequest, LoginRequest, LoginResponse, UpdateUserRequest, UserResponse};
pub use webhooks::{PolkaWebhookRequest, USER_UPGRADED_EVENT};
