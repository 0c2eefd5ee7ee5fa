//! # User Data Transfer Objects Module
//!
//! 사용자 관련 API의 요청/응답 데이터 구조를 정의합니다.
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── create_user_request.rs   # 회원가입, 계정 수정 요청
//! │   └── auth_request.rs          # 로그인 요청
//! └── response/
//!     └── user_response.rs         # 사용자 응답, 로그인 응답
//! ```

pub mod request;
pub mod response;

pub use request::{CreateUserRequest, LoginRequest, UpdateUserRequest};
pub use response::{LoginResponse, UserResponse};
