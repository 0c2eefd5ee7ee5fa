//! Revoked Token Entity
//!
//! 초기 스냅샷은 같은 레코드를 `{"id", "revoke_time"}` 키로 저장했습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 폐기된 리프레시 토큰
///
/// 목록에 존재하는 토큰은 내장된 만료 시각과 무관하게 영구히 사용할 수 없습니다.
/// 항목은 추가만 되며 삭제되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevokedToken {
    /// 폐기된 토큰 문자열 (기본 키)
    #[serde(alias = "id")]
    pub token: String,
    /// 최초 폐기 시각
    #[serde(alias = "revoke_time")]
    pub revoked_at: DateTime<Utc>,
}

impl RevokedToken {
    pub fn new(token: String, revoked_at: DateTime<Utc>) -> Self {
        Self { token, revoked_at }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_legacy_keys_with_offset_timestamp() {
        let json = r#"{"id": "tok", "revoke_time": "2024-03-01T09:15:30.123456789-05:00"}"#;
        let revoked: RevokedToken = serde_json::from_str(json).unwrap();

        assert_eq!(revoked.token, "tok");
        assert_eq!(
            revoked.revoked_at.timestamp(),
            Utc.with_ymd_and_hms(2024, 3, 1, 14, 15, 30).unwrap().timestamp()
        );
    }
}
