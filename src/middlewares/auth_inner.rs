//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage};
use chrono::Utc;
use futures_util::future::LocalBoxFuture;

use crate::domain::models::{AuthOutcome, AuthenticatedAccount, TokenKind};
use crate::errors::{AppError, TokenError};
use crate::services::auth::TokenService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            // 헤더가 없으면 기록하지 않음 (추출자가 Malformed로 처리)
            if req.headers().contains_key(header::AUTHORIZATION) {
                let token_service = req
                    .app_data::<web::Data<TokenService>>()
                    .cloned()
                    .ok_or_else(|| {
                        log::error!("TokenService가 앱 데이터에 등록되지 않았습니다");
                        AppError::InternalError("Token service unavailable".to_string())
                    })?;

                let outcome = authenticate(&req, &token_service);
                match &outcome {
                    Ok(account) => log::debug!("인증 성공: 사용자 ID {}", account.user_id),
                    Err(err) => log::debug!("액세스 토큰 검증 실패: {}", err),
                }
                req.extensions_mut().insert::<AuthOutcome>(outcome);
            }

            service.call(req).await
        })
    }
}

/// 요청의 Bearer 토큰을 액세스 토큰으로 검증
///
/// 저장소 조회가 필요 없으므로 워커 스레드에서 바로 실행합니다.
fn authenticate(req: &ServiceRequest, token_service: &TokenService) -> AuthOutcome {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(TokenError::Malformed)?;

    let token = TokenService::extract_bearer_token(auth_header)?;
    let claims = token_service.verify_at(token, TokenKind::Access, Utc::now())?;
    let user_id = claims.user_id().ok_or(TokenError::Malformed)?;

    Ok(AuthenticatedAccount { user_id })
}
