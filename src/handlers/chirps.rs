//! 게시글(chirp) HTTP 핸들러
//!
//! | 메서드 | 경로 | 인증 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/chirps` | 필요 | 201 Created |
//! | `GET` | `/api/chirps` | - | 200 OK |
//! | `GET` | `/api/chirps/{id}` | - | 200 OK / 404 |
//! | `DELETE` | `/api/chirps/{id}` | 작성자 본인 | 200 OK / 403 / 404 |

use actix_web::{delete, get, post, web, HttpResponse};

use crate::domain::dto::chirps::CreateChirpRequest;
use crate::domain::models::AuthenticatedAccount;
use crate::errors::AppError;
use crate::handlers::blocking;
use crate::services::chirps::ChirpService;

/// 게시글 작성
///
/// 140자를 넘는 본문은 400이며, 저장되는 본문은 욕설 필터를 거칩니다.
#[post("/chirps")]
pub async fn create_chirp(
    account: AuthenticatedAccount,
    chirp_service: web::Data<ChirpService>,
    payload: web::Json<CreateChirpRequest>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner();
    let service = chirp_service.clone();

    let chirp = blocking(move || service.create_chirp(account.user_id, request)).await?;

    Ok(HttpResponse::Created().json(chirp))
}

#[get("/chirps")]
pub async fn list_chirps(
    chirp_service: web::Data<ChirpService>,
) -> Result<HttpResponse, AppError> {
    let service = chirp_service.clone();
    let chirps = blocking(move || service.list_chirps()).await?;

    Ok(HttpResponse::Ok().json(chirps))
}

#[get("/chirps/{id}")]
pub async fn get_chirp(
    chirp_service: web::Data<ChirpService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let service = chirp_service.clone();

    let chirp = blocking(move || service.get_chirp(id)).await?;

    Ok(HttpResponse::Ok().json(chirp))
}

/// 게시글 삭제
///
/// 삭제된 게시글을 응답 본문으로 돌려줍니다.
#[delete("/chirps/{id}")]
pub async fn delete_chirp(
    account: AuthenticatedAccount,
    chirp_service: web::Data<ChirpService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let service = chirp_service.clone();

    let chirp = blocking(move || service.delete_chirp(id, account.user_id)).await?;

    log::info!("게시글 삭제: ID {} (작성자 {})", chirp.id, chirp.author_id);
    Ok(HttpResponse::Ok().json(chirp))
}
