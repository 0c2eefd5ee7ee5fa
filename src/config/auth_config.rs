//! # Authentication Configuration Module
//!
//! JWT 서명 비밀키와 웹훅 API 키 등 인증 관련 설정을 관리하는 모듈입니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! # 필수: 토큰 서명 비밀키
//! export JWT_SECRET="your-super-secret-jwt-key"
//!
//! # 선택: 결제 제공자 웹훅 키 (없으면 웹훅 비활성)
//! export POLKA_KEY="f271c81ff7084ee5b99a5091b42d486e"
//! ```
//!
//! 토큰 수명(액세스 1시간, 리프레시 60일)은 설정값이 아니라 고정 상수입니다.

use std::env;

use crate::errors::{AppError, AppResult};

/// JWT 토큰 설정
pub struct JwtConfig;

impl JwtConfig {
    /// 토큰 서명 비밀키
    ///
    /// # Errors
    ///
    /// `JWT_SECRET`이 없거나 비어 있으면 `AppError::ConfigError`입니다.
    /// 기본 비밀키로 대체하지 않습니다.
    pub fn secret() -> AppResult<String> {
        Self::secret_from(env::var("JWT_SECRET").ok())
    }

    pub fn secret_from(value: Option<String>) -> AppResult<String> {
        value
            .filter(|secret| !secret.trim().is_empty())
            .ok_or_else(|| AppError::ConfigError("JWT_SECRET must be set".to_string()))
    }
}

/// 결제 제공자(Polka) 웹훅 설정
pub struct PolkaConfig;

impl PolkaConfig {
    /// 웹훅 API 키 (`POLKA_KEY`)
    pub fn api_key() -> Option<String> {
        env::var("POLKA_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_is_required() {
        assert!(matches!(
            JwtConfig::secret_from(None),
            Err(AppError::ConfigError(_))
        ));
        assert!(matches!(
            JwtConfig::secret_from(Some("  ".to_string())),
            Err(AppError::ConfigError(_))
        ));
        assert_eq!(
            JwtConfig::secret_from(Some("s3cr3t".to_string())).unwrap(),
            "s3cr3t"
        );
    }
}
