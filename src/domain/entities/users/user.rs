//! User Entity Implementation
//!
//! 사용자 계정 엔티티의 핵심 구현체입니다.
//! 비밀번호는 bcrypt 해시 형태로만 저장되며, 외부 응답으로 직렬화될 때는
//! 반드시 `UserResponse` DTO를 거쳐 해시가 제거됩니다.
//!
//! 버전 필드가 없던 초기 스냅샷은 해시를 `Password` 키에 base64로 인코딩된
//! 바이트로 저장했으며, 읽을 때 그대로 `password_hash`로 복원됩니다.

use base64::{Engine as _, engine::general_purpose};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// 사용자 엔티티
///
/// 스냅샷 파일의 `users` 맵에 저장되는 계정 레코드입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// 사용자 고유 ID (단조 증가, 재사용되지 않음)
    pub id: u64,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// bcrypt 해시된 비밀번호 (없으면 빈 문자열, 로그인 불가)
    #[serde(alias = "Password", default, deserialize_with = "deserialize_password_hash")]
    pub password_hash: String,
    /// Chirpy Red 멤버십 여부 (이전 버전 파일에는 없을 수 있음)
    #[serde(default)]
    pub is_chirpy_red: bool,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 멤버십 없이 시작합니다.
    pub fn new(id: u64, email: String, password_hash: String) -> Self {
        Self {
            id,
            email,
            password_hash,
            is_chirpy_red: false,
        }
    }

    /// 토큰 subject로 사용할 ID 문자열
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }
}

/// bcrypt 해시는 항상 `$2`로 시작하므로 그 외의 값은 base64 인코딩으로 봅니다.
fn deserialize_password_hash<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    if raw.is_empty() || raw.starts_with("$2") {
        return Ok(raw);
    }

    let bytes = general_purpose::STANDARD
        .decode(raw.as_bytes())
        .map_err(|e| D::Error::custom(format!("password hash is not valid base64: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| D::Error::custom(format!("password hash is not UTF-8: {}", e)))
}
