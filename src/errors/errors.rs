//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 스토어, 토큰, 비즈니스 계층의 에러를 하나의 `AppError`로 모읍니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status |
//! |----------|-------------|
//! | `StorageUnavailable` | 500 Internal Server Error |
//! | `CorruptSnapshot` | 500 Internal Server Error |
//! | `ValidationError` | 400 Bad Request |
//! | `NotFound` | 404 Not Found |
//! | `ConflictError` | 409 Conflict |
//! | `AuthenticationError` | 401 Unauthorized |
//! | `AuthorizationError` | 403 Forbidden |
//! | `Token(AlreadyRevoked)` | 208 Already Reported |
//! | `Token(_)` | 401 Unauthorized |
//! | `ConfigError`, `InternalError` | 500 Internal Server Error |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! fn get_chirp(&self, id: u64) -> Result<Chirp, AppError> {
//!     self.chirp_repo
//!         .find_by_id(id)?
//!         .ok_or_else(|| AppError::NotFound(format!("chirp {} not found", id)))
//! }
//! ```

use thiserror::Error;
use validator::ValidationErrors;

use crate::db::StoreError;
use crate::domain::models::token::TokenKind;

/// 토큰 검증 단계에서 발생하는 에러
///
/// 검증은 `Malformed` → `WrongKind` → `Expired` → `Revoked` 순서로 진행되며,
/// 가장 먼저 실패한 단계가 보고됩니다. 각 변형은 진단을 위해 서로 다른
/// 메시지를 가집니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// 서명, 구조, 클레임 형식이 올바르지 않음
    #[error("Token is invalid")]
    Malformed,

    /// 발급자(iss) 구분값이 기대한 토큰 종류와 다름
    #[error("Token kind mismatch: expected {expected} token, found {found} token")]
    WrongKind {
        expected: TokenKind,
        found: TokenKind,
    },

    /// 만료 시각이 지남
    #[error("Token is expired")]
    Expired,

    /// 폐기 목록에 존재하는 리프레시 토큰
    #[error("Token is revoked")]
    Revoked,

    /// 이미 폐기된 토큰을 다시 폐기하려 함
    #[error("Token is already revoked")]
    AlreadyRevoked,
}

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 스냅샷 파일 I/O 실패 (500 Internal Server Error)
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// 스냅샷 역직렬화 실패 (500 Internal Server Error)
    #[error("Corrupt snapshot: {0}")]
    CorruptSnapshot(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 토큰 상태 에러
    #[error(transparent)]
    Token(#[from] TokenError),

    /// 설정 누락 또는 잘못된 설정값
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::StorageUnavailable { .. } | StoreError::Encode(_) => {
                AppError::StorageUnavailable(err.to_string())
            }
            StoreError::CorruptSnapshot { .. } | StoreError::UnsupportedVersion { .. } => {
                AppError::CorruptSnapshot(err.to_string())
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    /// `validator` 검증 결과를 400 응답용 메시지로 변환합니다.
    ///
    /// 필드별 메시지가 있으면 그 메시지를, 없으면 에러 코드를 사용합니다.
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{}: {}", field, e.code),
                })
            })
            .collect();
        messages.sort();

        AppError::ValidationError(messages.join(", "))
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::Token(TokenError::AlreadyRevoked) => StatusCode::ALREADY_REPORTED,
            AppError::Token(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
