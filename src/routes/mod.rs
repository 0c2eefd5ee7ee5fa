//! API 라우트 설정 모듈
//!
//! 모든 엔드포인트는 `/api` 스코프 아래에 등록되며, 스코프 전체가
//! [`AuthMiddleware`]로 감싸집니다. 미들웨어는 토큰 검증 결과만 기록하므로
//! 공개 라우트는 헤더 없이도 그대로 동작합니다.
//!
//! # Routes
//!
//! | 메서드 | 경로 | 인증 |
//! |--------|------|------|
//! | `GET` | `/api/healthz` | - |
//! | `POST` | `/api/users` | - |
//! | `PUT` | `/api/users` | 액세스 토큰 |
//! | `POST` | `/api/login` | - |
//! | `POST` | `/api/refresh` | 리프레시 토큰 |
//! | `POST` | `/api/revoke` | 리프레시 토큰 |
//! | `POST` | `/api/chirps` | 액세스 토큰 |
//! | `GET` | `/api/chirps` | - |
//! | `GET` | `/api/chirps/{id}` | - |
//! | `DELETE` | `/api/chirps/{id}` | 액세스 토큰 |
//! | `POST` | `/api/polka/webhooks` | `ApiKey` |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .configure(|cfg| services.register(cfg))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{get, web, HttpResponse};

use crate::errors::AppError;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// 모든 라우트를 설정합니다
///
/// 서비스(`web::Data`)는 [`crate::services::ServiceContainer::register`]로
/// 먼저 등록되어 있어야 합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // JSON 본문 파싱 실패도 {"error": ...} 형태의 400으로 응답
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(err.to_string()).into()
    }));

    cfg.service(
        web::scope("/api")
            .wrap(AuthMiddleware::new())
            .service(health_check)
            .configure(configure_user_routes)
            .configure(configure_auth_routes)
            .configure(configure_chirp_routes)
            .configure(configure_webhook_routes),
    );
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::users::create_user)
        .service(handlers::users::update_user);
}

/// 로그인과 토큰 수명 주기 라우트
///
/// ```bash
/// curl -X POST http://localhost:8080/api/login \
///   -H "Content-Type: application/json" \
///   -d '{"email":"walt@breakingbad.com","password":"123456"}'
///
/// curl -X POST http://localhost:8080/api/refresh \
///   -H "Authorization: Bearer <refresh_token>"
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::login)
        .service(handlers::auth::refresh_token)
        .service(handlers::auth::revoke_token);
}

fn configure_chirp_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::chirps::create_chirp)
        .service(handlers::chirps::list_chirps)
        .service(handlers::chirps::get_chirp)
        .service(handlers::chirps::delete_chirp);
}

fn configure_webhook_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::webhooks::polka_webhook);
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/api/healthz
/// ```
#[get("/healthz")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("OK")
}
