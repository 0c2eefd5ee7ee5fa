//! 리프레시 토큰 폐기 목록 리포지토리
//!
//! 폐기 목록은 추가만 가능하며 항목은 삭제되지 않습니다.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::info;

use crate::db::DocumentStore;
use crate::domain::entities::RevokedToken;
use crate::errors::{AppError, AppResult, TokenError};

#[derive(Debug, Clone)]
pub struct TokenRepository {
    store: Arc<DocumentStore>,
}

impl TokenRepository {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    /// 토큰을 폐기 목록에 추가합니다.
    ///
    /// 이미 폐기된 토큰이면 `TokenError::AlreadyRevoked`를 반환하고
    /// 최초 폐기 시각을 그대로 유지합니다.
    pub fn revoke(&self, token: &str, revoked_at: DateTime<Utc>) -> AppResult<RevokedToken> {
        let revoked = self.store.transact(|snapshot| {
            if snapshot.revoked_tokens.contains_key(token) {
                return Err(AppError::Token(TokenError::AlreadyRevoked));
            }

            let revoked = RevokedToken::new(token.to_string(), revoked_at);
            snapshot
                .revoked_tokens
                .insert(token.to_string(), revoked.clone());
            Ok(revoked)
        })?;

        info!("리프레시 토큰 폐기: {}", revoked.revoked_at.to_rfc3339());
        Ok(revoked)
    }

    /// 폐기 여부 확인
    pub fn is_revoked(&self, token: &str) -> AppResult<bool> {
        Ok(self
            .store
            .view(|snapshot| snapshot.revoked_tokens.contains_key(token))?)
    }
}
