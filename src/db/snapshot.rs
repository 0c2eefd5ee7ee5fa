//! 스냅샷: 디스크 파일과 1:1로 대응되는 전체 데이터 집합
//!
//! 파일 형식(버전 1):
//!
//! ```json
//! {
//!   "version": 1,
//!   "next_chirp_id": 3,
//!   "next_user_id": 2,
//!   "chirps": { "1": { "id": 1, "body": "...", "author_id": 1 } },
//!   "users": { "1": { "id": 1, "email": "a@x.com", "password_hash": "...", "is_chirpy_red": false } },
//!   "revoked_tokens": { "<token>": { "token": "<token>", "revoked_at": "2024-01-01T00:00:00Z" } }
//! }
//! ```
//!
//! 알 수 없는 최상위 필드는 `extra`에 보존되어 다시 기록됩니다.
//! `version`, `next_*_id` 필드가 없는 이전 형식 파일도 읽을 수 있으며,
//! 이 경우 카운터는 현재 가장 큰 ID + 1로 복원됩니다. 이전 형식의 레코드 키
//! (`Password`, `revoke_time` 등)는 각 엔티티가 현재 필드로 읽어 들입니다.

use std::collections::BTreeMap;

use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::entities::{Chirp, RevokedToken, User};

/// 이 빌드가 읽고 쓰는 스냅샷 형식 버전
pub const SNAPSHOT_VERSION: u32 = 1;

/// 저장 단위가 되는 전체 스냅샷
///
/// 모든 변경은 스냅샷 전체를 읽고, 하나의 논리적 변경을 적용한 뒤,
/// 스냅샷 전체를 다시 기록하는 방식으로 이루어집니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub version: u32,
    pub next_chirp_id: u64,
    pub next_user_id: u64,
    pub chirps: BTreeMap<u64, Chirp>,
    pub users: BTreeMap<u64, User>,
    pub revoked_tokens: BTreeMap<String, RevokedToken>,
    /// 이 버전이 모르는 최상위 필드
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            next_chirp_id: 1,
            next_user_id: 1,
            chirps: BTreeMap::new(),
            users: BTreeMap::new(),
            revoked_tokens: BTreeMap::new(),
            extra: Map::new(),
        }
    }
}

impl Snapshot {
    /// 다음 게시글 ID를 할당합니다.
    ///
    /// 카운터는 삭제와 무관하게 증가만 하므로 ID가 재사용되지 않습니다.
    pub fn allocate_chirp_id(&mut self) -> u64 {
        let id = self.next_chirp_id;
        self.next_chirp_id += 1;
        id
    }

    /// 다음 사용자 ID를 할당합니다.
    pub fn allocate_user_id(&mut self) -> u64 {
        let id = self.next_user_id;
        self.next_user_id += 1;
        id
    }

    /// 이메일로 사용자 선형 검색
    pub fn find_user_by_email(&self, email: &str) -> Option<&User> {
        self.users.values().find(|user| user.email == email)
    }

    pub fn is_empty(&self) -> bool {
        self.chirps.is_empty() && self.users.is_empty() && self.revoked_tokens.is_empty()
    }
}

// `#[serde(flatten)]`을 derive 역직렬화와 함께 쓰면 정수 키 맵을 읽지 못하므로
// 최상위 객체를 직접 분해합니다.
impl<'de> Deserialize<'de> for Snapshot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut fields = Map::<String, Value>::deserialize(deserializer)?;

        let version: u32 = take_field(&mut fields, "version")
            .map_err(D::Error::custom)?
            .unwrap_or(SNAPSHOT_VERSION);
        let stored_chirp_id: Option<u64> =
            take_field(&mut fields, "next_chirp_id").map_err(D::Error::custom)?;
        let stored_user_id: Option<u64> =
            take_field(&mut fields, "next_user_id").map_err(D::Error::custom)?;
        let chirps: BTreeMap<u64, Chirp> = take_field(&mut fields, "chirps")
            .map_err(D::Error::custom)?
            .unwrap_or_default();
        let users: BTreeMap<u64, User> = take_field(&mut fields, "users")
            .map_err(D::Error::custom)?
            .unwrap_or_default();
        let revoked_tokens: BTreeMap<String, RevokedToken> = take_field(&mut fields, "revoked_tokens")
            .map_err(D::Error::custom)?
            .unwrap_or_default();

        for (key, chirp) in &chirps {
            if *key != chirp.id {
                return Err(D::Error::custom(format!(
                    "chirp stored under key {} has id {}",
                    key, chirp.id
                )));
            }
        }
        for (key, user) in &users {
            if *key != user.id {
                return Err(D::Error::custom(format!(
                    "user stored under key {} has id {}",
                    key, user.id
                )));
            }
        }

        let next_chirp_id = next_id(stored_chirp_id, chirps.keys().next_back());
        let next_user_id = next_id(stored_user_id, users.keys().next_back());

        Ok(Snapshot {
            version,
            next_chirp_id,
            next_user_id,
            chirps,
            users,
            revoked_tokens,
            extra: fields,
        })
    }
}

/// 저장된 카운터와 실제 최대 ID 중 안전한 쪽을 선택
fn next_id(stored: Option<u64>, max_key: Option<&u64>) -> u64 {
    let floor = max_key.map_or(1, |max| max + 1);
    stored.unwrap_or(floor).max(floor)
}

fn take_field<T>(fields: &mut Map<String, Value>, key: &str) -> Result<Option<T>, String>
where
    T: DeserializeOwned,
{
    match fields.remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| format!("field `{}`: {}", key, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn populated() -> Snapshot {
        let mut snapshot = Snapshot::default();
        for body in ["first", "second", "third"] {
            let id = snapshot.allocate_chirp_id();
            snapshot.chirps.insert(id, Chirp::new(id, body.to_string(), 1));
        }
        let id = snapshot.allocate_user_id();
        snapshot
            .users
            .insert(id, User::new(id, "a@x.com".to_string(), "$2b$04$hash".to_string()));
        let revoked_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        snapshot.revoked_tokens.insert(
            "tok".to_string(),
            RevokedToken::new("tok".to_string(), revoked_at),
        );
        snapshot
    }

    #[test]
    fn test_round_trip_empty_and_populated() {
        for snapshot in [Snapshot::default(), populated()] {
            let bytes = serde_json::to_vec(&snapshot).unwrap();
            let decoded: Snapshot = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(decoded, snapshot);
        }
    }

    #[test]
    fn test_file_layout_uses_named_collections() {
        let value = serde_json::to_value(populated()).unwrap();
        assert!(value["chirps"]["1"].is_object());
        assert_eq!(value["users"]["1"]["email"], "a@x.com");
        assert_eq!(value["revoked_tokens"]["tok"]["token"], "tok");
        assert_eq!(value["version"], SNAPSHOT_VERSION);
    }

    #[test]
    fn test_unknown_fields_are_preserved() {
        let json = r#"{"version":1,"chirps":{},"users":{},"revoked_tokens":{},"audit":{"enabled":true}}"#;
        let snapshot: Snapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.extra["audit"]["enabled"], true);

        let rewritten = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(rewritten["audit"]["enabled"], true);
    }

    #[test]
    fn test_legacy_file_without_counters_resumes_after_max_id() {
        let json = r#"{
            "chirps": {
                "1": {"id": 1, "body": "a", "author_id": 1},
                "4": {"id": 4, "body": "b", "author_id": 1}
            },
            "users": {},
            "revoked_tokens": null
        }"#;
        let mut snapshot: Snapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
        assert_eq!(snapshot.allocate_chirp_id(), 5);
        assert_eq!(snapshot.allocate_user_id(), 1);
        assert!(snapshot.revoked_tokens.is_empty());
    }

    #[test]
    fn test_versionless_file_with_original_record_keys_loads() {
        // base64("$2a$04$...")
        let json = r#"{
            "chirps": {"1": {"id": 1, "body": "hello", "author_id": 2}},
            "users": {
                "2": {"id": 2, "email": "walt@breakingbad.com", "Password": "JDJhJDA0JGFiY2RlZmdoaWprbG1ub3BxcnN0dXV2d3h5ejAxMjM0NTY3ODlBQkNERUZH"},
                "3": {"id": 3, "email": "jesse@breakingbad.com"}
            },
            "revoked_tokens": {
                "old-refresh": {"id": "old-refresh", "revoke_time": "2024-04-02T10:20:30.5+02:00"}
            }
        }"#;
        let mut snapshot: Snapshot = serde_json::from_str(json).unwrap();

        assert_eq!(
            snapshot.users[&2].password_hash,
            "$2a$04$abcdefghijklmnopqrstuuvwxyz0123456789ABCDEFG"
        );
        assert!(snapshot.users[&3].password_hash.is_empty());
        assert_eq!(snapshot.revoked_tokens["old-refresh"].token, "old-refresh");
        assert_eq!(
            snapshot.revoked_tokens["old-refresh"].revoked_at,
            Utc.with_ymd_and_hms(2024, 4, 2, 8, 20, 30).unwrap() + chrono::Duration::milliseconds(500)
        );
        assert_eq!(snapshot.allocate_user_id(), 4);
        assert_eq!(snapshot.allocate_chirp_id(), 2);
    }

    #[test]
    fn test_stale_counter_never_reuses_existing_id() {
        let json = r#"{"next_chirp_id": 1, "chirps": {"2": {"id": 2, "body": "x", "author_id": 1}}}"#;
        let mut snapshot: Snapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.allocate_chirp_id(), 3);
    }

    #[test]
    fn test_mismatched_key_is_rejected() {
        let json = r#"{"chirps": {"2": {"id": 3, "body": "x", "author_id": 1}}}"#;
        assert!(serde_json::from_str::<Snapshot>(json).is_err());
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut snapshot = populated();
        snapshot.chirps.remove(&3);
        assert_eq!(snapshot.allocate_chirp_id(), 4);
    }
}
