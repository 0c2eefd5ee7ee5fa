//! JWT 인증 토큰 구조체 및 페어링 된 세트
//!
//! RFC 7519 JWT 표준 클레임과 2개의 용도별 토큰을 페어링 한 정보를 표시합니다.

use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// 토큰 용도 구분
///
/// 발급자(`iss`) 클레임에 종류 문자열을 기록하여 액세스 토큰을 리프레시
/// 용도로, 혹은 그 반대로 사용하는 것을 막습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// API 접근용 단기 토큰 (1시간)
    Access,
    /// 액세스 토큰 재발급용 장기 토큰 (60일)
    Refresh,
}

impl TokenKind {
    /// `iss` 클레임에 기록되는 구분값
    pub fn issuer(self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }

    /// `iss` 클레임 값으로부터 종류를 복원합니다. 알 수 없는 값이면 `None`.
    pub fn from_issuer(issuer: &str) -> Option<Self> {
        match issuer {
            "access" => Some(TokenKind::Access),
            "refresh" => Some(TokenKind::Refresh),
            _ => None,
        }
    }

    /// 발급 시점부터 만료까지의 고정 수명
    pub fn lifetime(self) -> Duration {
        match self {
            TokenKind::Access => Duration::hours(1),
            TokenKind::Refresh => Duration::days(60),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.issuer())
    }
}

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (사용자 ID 문자열)
/// - `iss`: 토큰 종류 구분값 (`"access"` / `"refresh"`)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
/// - `jti`: 토큰 고유 ID. 같은 초에 발급된 토큰도 서로 다른 문자열이 됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

impl TokenClaims {
    /// `sub`를 사용자 ID로 해석합니다.
    pub fn user_id(&self) -> Option<u64> {
        self.sub.parse().ok()
    }
}

/// 로그인 시 함께 발급되는 토큰 쌍
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// 액세스 토큰 (API 접근용 단기 토큰)
    pub access_token: String,
    /// 리프레시 토큰 (토큰 갱신용 장기 토큰)
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issuer_round_trip() {
        for kind in [TokenKind::Access, TokenKind::Refresh] {
            assert_eq!(TokenKind::from_issuer(kind.issuer()), Some(kind));
        }
        assert_eq!(TokenKind::from_issuer("chirpy"), None);
    }

    #[test]
    fn test_fixed_lifetimes() {
        assert_eq!(TokenKind::Access.lifetime().num_seconds(), 3600);
        assert_eq!(TokenKind::Refresh.lifetime().num_days(), 60);
    }
}
