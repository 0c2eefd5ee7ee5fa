//! 사용자 생성/수정 요청 DTO
//!
//! 회원가입(`POST /api/users`)과 계정 정보 수정(`PUT /api/users`)은
//! 같은 `{email, password}` 본문을 사용합니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 새로운 사용자 계정 생성을 위한 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// 사용자 이메일 주소 (계정 간 유일)
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    /// 평문 비밀번호. 해시된 뒤에만 저장됩니다.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// 로그인한 사용자의 이메일/비밀번호 변경 요청 DTO
///
/// 두 값 모두 무조건 덮어씁니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}
