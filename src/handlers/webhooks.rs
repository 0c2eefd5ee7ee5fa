//! 결제 제공자 웹훅 핸들러

use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::domain::dto::webhooks::PolkaWebhookRequest;
use crate::errors::AppError;
use crate::handlers::{authorization_header, blocking};
use crate::services::webhooks::{PolkaService, WebhookOutcome};

/// Polka 웹훅 수신
///
/// `Authorization: ApiKey <key>` 헤더가 필요합니다. 본문은 키 검증이
/// 끝난 뒤에 해석합니다. 처리한 이벤트와 무시한 이벤트 모두
/// `204 No Content`로 응답합니다.
///
/// # Errors
///
/// * `401 Unauthorized` - API 키 누락 또는 불일치 (본문과 무관)
/// * `400 Bad Request` - 이벤트 JSON 형식 오류
/// * `404 Not Found` - 업그레이드 대상 사용자 없음
#[post("/polka/webhooks")]
pub async fn polka_webhook(
    req: HttpRequest,
    polka_service: web::Data<PolkaService>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    polka_service.verify_api_key(authorization_header(&req))?;

    let event: PolkaWebhookRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::ValidationError(format!("Json deserialize error: {}", e)))?;
    let service = polka_service.clone();

    match blocking(move || service.handle_event(event)).await? {
        WebhookOutcome::Upgraded(user_id) => {
            log::info!("Chirpy Red 업그레이드: 사용자 ID {}", user_id)
        }
        WebhookOutcome::Ignored => {}
    }

    Ok(HttpResponse::NoContent().finish())
}
