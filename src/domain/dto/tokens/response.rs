use serde::{Deserialize, Serialize};

/// 액세스 토큰 재발급 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub token: String,
}
