//! # User Management HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/users` | 새 사용자 생성 | 201 Created |
//! | `PUT` | `/api/users` | 본인 이메일/비밀번호 수정 | 200 OK |
//!
//! 응답 본문은 `{id, email}`이며 비밀번호 해시는 포함되지 않습니다.

use actix_web::{post, put, web, HttpResponse};

use crate::domain::dto::users::{CreateUserRequest, UpdateUserRequest};
use crate::domain::models::AuthenticatedAccount;
use crate::errors::AppError;
use crate::handlers::blocking;
use crate::services::users::UserService;

/// 사용자 생성 핸들러
///
/// # Errors
///
/// * `400 Bad Request` - 이메일 또는 비밀번호 누락
/// * `409 Conflict` - 이미 사용 중인 이메일
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/users \
///   -H "Content-Type: application/json" \
///   -d '{"email":"walt@breakingbad.com","password":"123456"}'
/// ```
#[post("/users")]
pub async fn create_user(
    user_service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner();
    let service = user_service.clone();

    let response = blocking(move || service.create_user(request)).await?;

    log::info!("사용자 생성 완료: ID {}", response.id);
    Ok(HttpResponse::Created().json(response))
}

/// 계정 정보 수정 핸들러
///
/// 액세스 토큰의 사용자 본인 계정만 수정합니다.
#[put("/users")]
pub async fn update_user(
    account: AuthenticatedAccount,
    user_service: web::Data<UserService>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner();
    let service = user_service.clone();

    let response = blocking(move || service.update_user(account.user_id, request)).await?;

    Ok(HttpResponse::Ok().json(response))
}
