//! # 사용자 관련 응답 DTO 모듈
//!
//! 민감한 정보(비밀번호 해시)를 제외하고 클라이언트에게 전달할 형태로
//! 변환합니다.
//!
//! ## JSON 응답 예제
//!
//! ### 표준 사용자 응답
//! ```json
//! { "id": 1, "email": "user@example.com" }
//! ```
//!
//! ### 로그인 응답
//! ```json
//! {
//!   "id": 1,
//!   "email": "user@example.com",
//!   "is_chirpy_red": false,
//!   "token": "eyJhbGciOiJIUzI1NiIs...",
//!   "refresh_token": "eyJhbGciOiJIUzI1NiIs..."
//! }
//! ```

pub mod user_response;

pub use user_response::{LoginResponse, UserResponse};
