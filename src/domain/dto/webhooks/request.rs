//! 결제 제공자(Polka) 웹훅 요청 DTO
use serde::{Deserialize, Serialize};

/// 멤버십 업그레이드 이벤트 이름
pub const USER_UPGRADED_EVENT: &str = "user.upgraded";

/// 웹훅 이벤트 본문
///
/// ```json
/// { "event": "user.upgraded", "data": { "user_id": 3 } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolkaWebhookRequest {
    pub event: String,
    pub data: PolkaWebhookData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolkaWebhookData {
    pub user_id: u64,
}

impl PolkaWebhookRequest {
    pub fn is_user_upgraded(&self) -> bool {
        self.event == USER_UPGRADED_EVENT
    }
}
