//! 결제 제공자(Polka) 웹훅 처리 서비스
//!
//! `Authorization: ApiKey <key>` 헤더로 호출자를 확인한 뒤
//! `user.upgraded` 이벤트에 대해 Chirpy Red 멤버십을 부여합니다.

use std::sync::Arc;

use log::{info, warn};

use crate::domain::dto::webhooks::PolkaWebhookRequest;
use crate::errors::{AppError, AppResult};
use crate::services::users::UserService;

/// 웹훅 처리 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookOutcome {
    /// 사용자 멤버십이 갱신됨
    Upgraded(u64),
    /// 관심 없는 이벤트, 상태 변경 없음
    Ignored,
}

pub struct PolkaService {
    api_key: Option<String>,
    user_service: Arc<UserService>,
}

impl PolkaService {
    /// `api_key`가 `None`이면 모든 웹훅 호출을 거부합니다.
    pub fn new(api_key: Option<String>, user_service: Arc<UserService>) -> Self {
        Self {
            api_key,
            user_service,
        }
    }

    /// `Authorization` 헤더 값 검증
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 키 미설정, 헤더 누락, 형식 오류, 키 불일치
    pub fn verify_api_key(&self, auth_header: Option<&str>) -> AppResult<()> {
        let expected = self.api_key.as_deref().ok_or_else(|| {
            warn!("POLKA_KEY가 설정되지 않아 웹훅을 거부합니다");
            AppError::AuthenticationError("Webhook is not configured".to_string())
        })?;

        let provided = auth_header
            .and_then(|value| value.strip_prefix("ApiKey "))
            .map(str::trim)
            .ok_or_else(|| AppError::AuthenticationError("Missing API key".to_string()))?;

        if !constant_time_eq(provided.as_bytes(), expected.as_bytes()) {
            warn!("잘못된 웹훅 API 키");
            return Err(AppError::AuthenticationError("Invalid API key".to_string()));
        }

        Ok(())
    }

    /// 이벤트 처리
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 업그레이드 대상 사용자 없음
    pub fn handle_event(&self, event: PolkaWebhookRequest) -> AppResult<WebhookOutcome> {
        if !event.is_user_upgraded() {
            info!("무시된 웹훅 이벤트: {}", event.event);
            return Ok(WebhookOutcome::Ignored);
        }

        let user = self.user_service.upgrade_user(event.data.user_id)?;
        Ok(WebhookOutcome::Upgraded(user.id))
    }
}

/// 길이가 같으면 첫 불일치에서 멈추지 않고 모든 바이트를 비교합니다.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DocumentStore;
    use crate::domain::dto::users::CreateUserRequest;
    use crate::domain::dto::webhooks::PolkaWebhookData;
    use crate::repositories::users::UserRepository;
    use crate::services::auth::PasswordService;
    use tempfile::TempDir;

    fn service(api_key: Option<&str>) -> (TempDir, Arc<UserService>, PolkaService) {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::initialize(dir.path().join("database.json")).unwrap();
        let repo = Arc::new(UserRepository::new(Arc::new(store)));
        let users = Arc::new(UserService::new(repo, PasswordService::new(4)));
        let polka = PolkaService::new(api_key.map(str::to_string), Arc::clone(&users));
        (dir, users, polka)
    }

    fn event(name: &str, user_id: u64) -> PolkaWebhookRequest {
        PolkaWebhookRequest {
            event: name.to_string(),
            data: PolkaWebhookData { user_id },
        }
    }

    #[test]
    fn test_api_key_verification() {
        let (_dir, _users, polka) = service(Some("f271c81ff7084ee5b99a5091b42d486e"));
        assert!(polka.verify_api_key(Some("ApiKey f271c81ff7084ee5b99a5091b42d486e")).is_ok());
        assert!(polka.verify_api_key(Some("ApiKey wrong")).is_err());
        assert!(polka.verify_api_key(Some("Bearer f271c81ff7084ee5b99a5091b42d486e")).is_err());
        assert!(polka.verify_api_key(None).is_err());
    }

    #[test]
    fn test_key_comparison_covers_every_byte() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"xbc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abcd"));
        assert!(constant_time_eq(b"", b""));

        let (_dir, _users, polka) = service(Some("key"));
        assert!(polka.verify_api_key(Some("ApiKey kex")).is_err());
        assert!(polka.verify_api_key(Some("ApiKey key2")).is_err());
    }

    #[test]
    fn test_unconfigured_key_rejects_everything() {
        let (_dir, _users, polka) = service(None);
        assert!(matches!(
            polka.verify_api_key(Some("ApiKey anything")),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_upgrade_event() {
        let (_dir, users, polka) = service(Some("key"));
        let created = users
            .create_user(CreateUserRequest {
                email: "a@x.com".to_string(),
                password: "pw".to_string(),
            })
            .unwrap();

        let outcome = polka.handle_event(event("user.upgraded", created.id)).unwrap();
        assert_eq!(outcome, WebhookOutcome::Upgraded(created.id));
        assert!(users.verify_password("a@x.com", "pw").unwrap().is_chirpy_red);
    }

    #[test]
    fn test_other_events_change_nothing() {
        let (_dir, _users, polka) = service(Some("key"));
        let outcome = polka.handle_event(event("user.payment_failed", 99)).unwrap();
        assert_eq!(outcome, WebhookOutcome::Ignored);
    }

    #[test]
    fn test_upgrade_unknown_user() {
        let (_dir, _users, polka) = service(Some("key"));
        assert!(matches!(
            polka.handle_event(event("user.upgraded", 99)),
            Err(AppError::NotFound(_))
        ));
    }
}
