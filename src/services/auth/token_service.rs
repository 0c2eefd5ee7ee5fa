//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! 액세스 토큰과 리프레시 토큰의 생성, 검증, 갱신, 폐기를 담당합니다.
//!
//! ## 검증 단계
//!
//! ```text
//! 서명/구조 ──▶ 종류(iss) ──▶ 만료(exp) ──▶ 폐기 목록 (리프레시만)
//!  Malformed     WrongKind      Expired        Revoked
//! ```
//!
//! 가장 먼저 실패한 단계의 에러가 보고됩니다. 계정 저장소는 조회하지 않으므로
//! 삭제된 계정의 토큰도 만료 전까지는 서명상 유효합니다.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use log::{debug, warn};
use uuid::Uuid;

use crate::domain::entities::{RevokedToken, User};
use crate::domain::models::{TokenClaims, TokenKind, TokenPair};
use crate::errors::{AppError, AppResult, TokenError};
use crate::repositories::tokens::TokenRepository;

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하여 JWT 토큰을 생성하고 검증합니다.
/// 서명 비밀키는 생성자로만 주입되며 전역 상태를 읽지 않습니다.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_repo: Arc<TokenRepository>,
}

impl TokenService {
    pub fn new(secret: &str, token_repo: Arc<TokenRepository>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // 만료는 종류 검사 이후 단계에서 직접 판정합니다.
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            token_repo,
        }
    }

    /// 현재 시각 기준으로 토큰을 발급합니다.
    pub fn issue(&self, subject: &str, kind: TokenKind) -> AppResult<String> {
        self.issue_at(subject, kind, Utc::now())
    }

    /// 주어진 발급 시각으로 토큰을 발급합니다.
    ///
    /// `exp`는 `issued_at + kind.lifetime()`입니다.
    pub fn issue_at(
        &self,
        subject: &str,
        kind: TokenKind,
        issued_at: DateTime<Utc>,
    ) -> AppResult<String> {
        let claims = TokenClaims {
            sub: subject.to_string(),
            iss: kind.issuer().to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + kind.lifetime()).timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 로그인 응답용 토큰 쌍 (액세스 + 리프레시)
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let pair = token_service.issue_pair(&user)?;
    /// println!("Access token: {}", pair.access_token);
    /// ```
    pub fn issue_pair(&self, user: &User) -> AppResult<TokenPair> {
        let subject = user.id_string();
        let now = Utc::now();

        Ok(TokenPair {
            access_token: self.issue_at(&subject, TokenKind::Access, now)?,
            refresh_token: self.issue_at(&subject, TokenKind::Refresh, now)?,
        })
    }

    /// 토큰을 검증하고 subject를 반환합니다.
    pub fn validate(&self, token: &str, expected: TokenKind) -> AppResult<String> {
        Ok(self.validate_at(token, expected, Utc::now())?.sub)
    }

    /// 전체 검증 (서명, 종류, 만료, 리프레시 토큰의 폐기 여부)
    ///
    /// # Errors
    ///
    /// * `AppError::Token(_)` - 검증 단계 실패
    /// * `AppError::StorageUnavailable` 등 - 폐기 목록 조회 실패
    pub fn validate_at(
        &self,
        token: &str,
        expected: TokenKind,
        now: DateTime<Utc>,
    ) -> AppResult<TokenClaims> {
        let claims = self.verify_at(token, expected, now)?;

        if expected == TokenKind::Refresh && self.token_repo.is_revoked(token)? {
            warn!("폐기된 리프레시 토큰 사용 시도: sub={}", claims.sub);
            return Err(TokenError::Revoked.into());
        }

        Ok(claims)
    }

    /// 저장소를 조회하지 않는 검증 (서명, 종류, 만료)
    ///
    /// 액세스 토큰은 폐기 경로가 없으므로 이 단계로 충분합니다.
    pub fn verify_at(
        &self,
        token: &str,
        expected: TokenKind,
        now: DateTime<Utc>,
    ) -> Result<TokenClaims, TokenError> {
        let claims = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!("토큰 디코딩 실패: {}", e);
                TokenError::Malformed
            })?;

        let found = TokenKind::from_issuer(&claims.iss).ok_or(TokenError::Malformed)?;
        if found != expected {
            warn!("토큰 종류 불일치: expected={}, found={}", expected, found);
            return Err(TokenError::WrongKind { expected, found });
        }

        if now.timestamp() > claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// 리프레시 토큰으로 새 액세스 토큰을 발급합니다.
    pub fn refresh_access(&self, refresh_token: &str) -> AppResult<String> {
        let subject = self.validate(refresh_token, TokenKind::Refresh)?;
        self.issue(&subject, TokenKind::Access)
    }

    /// 리프레시 토큰을 폐기합니다.
    ///
    /// 서명, 종류, 만료까지 확인한 뒤 폐기 목록에 기록합니다. 이미 폐기된
    /// 토큰이면 `TokenError::AlreadyRevoked`입니다.
    pub fn revoke(&self, refresh_token: &str) -> AppResult<RevokedToken> {
        let now = Utc::now();
        self.verify_at(refresh_token, TokenKind::Refresh, now)?;
        self.token_repo.revoke(refresh_token, now)
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let auth_header = "Bearer eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...";
    /// let token = TokenService::extract_bearer_token(auth_header)?;
    /// ```
    pub fn extract_bearer_token(auth_header: &str) -> Result<&str, TokenError> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(TokenError::Malformed),
        }
    }
}
