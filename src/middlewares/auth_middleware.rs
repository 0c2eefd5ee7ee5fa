//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 액세스 토큰을 검증하고 결과를
//! request extension에 기록합니다. 요청을 직접 거부하지 않으며,
//! 인증이 필요한 핸들러는 `AuthenticatedAccount` 추출자로 결과를 확인합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
///
/// 토큰 검증에는 앱에 등록된 `web::Data<TokenService>`를 사용합니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthMiddleware;

impl AuthMiddleware {
    pub fn new() -> Self {
        Self
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{get, http::StatusCode, test, web, App, HttpResponse};
    use tempfile::TempDir;

    use super::*;
    use crate::db::DocumentStore;
    use crate::domain::models::{AuthenticatedAccount, TokenKind};
    use crate::errors::AppError;
    use crate::repositories::tokens::TokenRepository;
    use crate::services::auth::TokenService;

    const SECRET: &str = "middleware-secret";

    #[get("/whoami")]
    async fn whoami(account: AuthenticatedAccount) -> Result<HttpResponse, AppError> {
        Ok(HttpResponse::Ok().body(account.user_id.to_string()))
    }

    #[get("/open")]
    async fn open() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    fn token_service() -> (TempDir, Arc<TokenService>) {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::initialize(dir.path().join("database.json")).unwrap();
        let repo = Arc::new(TokenRepository::new(Arc::new(store)));
        (dir, Arc::new(TokenService::new(SECRET, repo)))
    }

    #[actix_web::test]
    async fn test_valid_access_token_reaches_handler() {
        let (_dir, tokens) = token_service();
        let access = tokens.issue("42", TokenKind::Access).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(Arc::clone(&tokens)))
                .wrap(AuthMiddleware::new())
                .service(whoami),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", format!("Bearer {}", access)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(body, "42");
    }

    #[actix_web::test]
    async fn test_refresh_token_is_rejected_as_access() {
        let (_dir, tokens) = token_service();
        let refresh = tokens.issue("42", TokenKind::Refresh).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(Arc::clone(&tokens)))
                .wrap(AuthMiddleware::new())
                .service(whoami),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", format!("Bearer {}", refresh)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_missing_header_only_matters_for_protected_routes() {
        let (_dir, tokens) = token_service();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(Arc::clone(&tokens)))
                .wrap(AuthMiddleware::new())
                .service(whoami)
                .service(open),
        )
        .await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/open").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/whoami").to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_non_numeric_subject_is_malformed() {
        let (_dir, tokens) = token_service();
        let access = tokens.issue("not-a-number", TokenKind::Access).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(Arc::clone(&tokens)))
                .wrap(AuthMiddleware::new())
                .service(whoami),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", format!("Bearer {}", access)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
