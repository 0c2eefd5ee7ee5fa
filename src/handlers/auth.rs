//! Authentication HTTP Handlers
//!
//! 로그인과 토큰 수명 주기를 처리하는 핸들러 함수들입니다.
//!
//! - `POST /api/login` - 이메일/비밀번호 로그인, 액세스/리프레시 토큰 발급
//! - `POST /api/refresh` - 리프레시 토큰으로 액세스 토큰 재발급
//! - `POST /api/revoke` - 리프레시 토큰 폐기 (이미 폐기됨: 208)
use actix_web::{post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::domain::dto::tokens::RefreshResponse;
use crate::domain::dto::users::{LoginRequest, LoginResponse};
use crate::errors::AppError;
use crate::handlers::{bearer_token, blocking};
use crate::services::auth::TokenService;
use crate::services::users::UserService;

/// 로컬 로그인 핸들러
///
/// 알 수 없는 이메일과 틀린 비밀번호는 같은 401 메시지로 응답합니다.
///
/// # Endpoint
/// `POST /api/login`
#[post("/login")]
pub async fn login(
    user_service: web::Data<UserService>,
    token_service: web::Data<TokenService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let request = payload.into_inner();
    let users = user_service.clone();
    let tokens = token_service.clone();

    let response = blocking(move || {
        let user = users.verify_password(&request.email, &request.password)?;
        let pair = tokens.issue_pair(&user)?;
        Ok(LoginResponse::new(user, pair))
    })
    .await?;

    log::info!("로그인 성공: 사용자 ID {}", response.id);
    Ok(HttpResponse::Ok().json(response))
}

/// 액세스 토큰 재발급 핸들러
///
/// # Endpoint
/// `POST /api/refresh` (`Authorization: Bearer <refresh_token>`)
#[post("/refresh")]
pub async fn refresh_token(
    req: HttpRequest,
    token_service: web::Data<TokenService>,
) -> Result<HttpResponse, AppError> {
    let refresh = bearer_token(&req)?;
    let tokens = token_service.clone();

    let token = blocking(move || tokens.refresh_access(&refresh)).await?;

    Ok(HttpResponse::Ok().json(RefreshResponse { token }))
}

/// 리프레시 토큰 폐기 핸들러
///
/// 성공 시 폐기 기록을 반환합니다. 같은 토큰을 다시 폐기하면
/// `208 Already Reported`입니다.
///
/// # Endpoint
/// `POST /api/revoke` (`Authorization: Bearer <refresh_token>`)
#[post("/revoke")]
pub async fn revoke_token(
    req: HttpRequest,
    token_service: web::Data<TokenService>,
) -> Result<HttpResponse, AppError> {
    let refresh = bearer_token(&req)?;
    let tokens = token_service.clone();

    let revoked = blocking(move || tokens.revoke(&refresh)).await?;

    log::info!("리프레시 토큰 폐기: {}", revoked.revoked_at);
    Ok(HttpResponse::Ok().json(revoked))
}
