use std::future::{ready, Ready};

use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, TokenError};

/// 액세스 토큰에서 추출된 계정 정보
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedAccount {
    /// 토큰 subject에 기록된 사용자 ID
    pub user_id: u64,
}

/// 인증 미들웨어가 요청 extension에 남기는 검증 결과
///
/// 실패도 그대로 저장하여 핸들러 추출 시점에 구체적인 토큰 에러
/// (`Malformed`, `Expired` 등)로 응답할 수 있게 합니다.
pub type AuthOutcome = Result<AuthenticatedAccount, TokenError>;

/// ActixWeb FromRequest trait 구현
///
/// 인증 미들웨어를 거치지 않았거나 `Authorization` 헤더가 없으면
/// `TokenError::Malformed`로 거부합니다.
impl FromRequest for AuthenticatedAccount {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let outcome = req
            .extensions()
            .get::<AuthOutcome>()
            .cloned()
            .unwrap_or(Err(TokenError::Malformed));

        ready(outcome.map_err(AppError::from))
    }
}
