//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 요청 파싱과 응답 상태 코드 결정만 담당하고, 실제 처리는 서비스 계층에 위임합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리        ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                       ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 레코드 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   DocumentStore - JSON 스냅샷 파일               ← Storage
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 블로킹 작업
//!
//! 스냅샷 파일 I/O와 bcrypt 연산은 동기 API입니다. 핸들러는 이들을
//! [`blocking`]으로 감싸 actix 블로킹 스레드 풀에서 실행하므로
//! 워커의 이벤트 루프가 멈추지 않습니다.
//!
//! ```rust,ignore
//! #[post("/chirps")]
//! pub async fn create_chirp(
//!     account: AuthenticatedAccount,
//!     chirp_service: web::Data<ChirpService>,
//!     payload: web::Json<CreateChirpRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     let service = chirp_service.clone();
//!     let chirp = blocking(move || service.create_chirp(account.user_id, payload.into_inner())).await?;
//!     Ok(HttpResponse::Created().json(chirp))
//! }
//! ```
//!
//! ## 모듈 구성
//!
//! - **`users`**: 회원가입, 계정 수정
//! - **`auth`**: 로그인, 액세스 토큰 재발급, 리프레시 토큰 폐기
//! - **`chirps`**: 게시글 작성, 조회, 삭제
//! - **`webhooks`**: 결제 제공자 웹훅

pub mod auth;
pub mod chirps;
pub mod users;
pub mod webhooks;

use actix_web::{web, HttpRequest};
use actix_web::http::header;

use crate::errors::{AppError, AppResult, TokenError};
use crate::services::auth::TokenService;

/// 동기 작업을 블로킹 스레드 풀에서 실행합니다.
pub(crate) async fn blocking<F, T>(f: F) -> AppResult<T>
where
    F: FnOnce() -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    web::block(f).await.map_err(|e| {
        log::error!("블로킹 작업 실패: {}", e);
        AppError::InternalError(format!("Blocking task failed: {}", e))
    })?
}

/// `Authorization` 헤더 원문
pub(crate) fn authorization_header(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
}

/// `Authorization: Bearer <token>`에서 토큰 추출
///
/// 헤더가 없거나 형식이 다르면 `TokenError::Malformed`입니다.
pub(crate) fn bearer_token(req: &HttpRequest) -> AppResult<String> {
    let auth_header = authorization_header(req).ok_or(TokenError::Malformed)?;
    Ok(TokenService::extract_bearer_token(auth_header)?.to_string())
}
