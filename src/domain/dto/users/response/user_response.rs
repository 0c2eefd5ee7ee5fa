use serde::{Deserialize, Serialize};

use crate::domain::entities::User;
use crate::domain::models::TokenPair;

/// 사용자 응답 DTO
///
/// 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: u64,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

/// 로그인 응답 DTO (JWT 토큰 포함)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub id: u64,
    pub email: String,
    pub is_chirpy_red: bool,
    /// 액세스 토큰
    pub token: String,
    pub refresh_token: String,
}

impl LoginResponse {
    /// 새 로그인 응답 생성
    pub fn new(user: User, tokens: TokenPair) -> Self {
        Self {
            id: user.id,
            email: user.email,
            is_chirpy_red: user.is_chirpy_red,
            token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_hides_password_hash() {
        let user = User::new(1, "a@x.com".to_string(), "$2b$04$hash".to_string());
        let value = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(value, serde_json::json!({"id": 1, "email": "a@x.com"}));
    }

    #[test]
    fn test_login_response_shape() {
        let mut user = User::new(2, "b@x.com".to_string(), "$2b$04$hash".to_string());
        user.is_chirpy_red = true;
        let tokens = TokenPair {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
        };

        let value = serde_json::to_value(LoginResponse::new(user, tokens)).unwrap();
        assert_eq!(value["id"], 2);
        assert_eq!(value["is_chirpy_red"], true);
        assert_eq!(value["token"], "access");
        assert_eq!(value["refresh_token"], "refresh");
        assert!(value.get("password_hash").is_none());
    }
}
