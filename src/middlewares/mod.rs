//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer <token>` 헤더에서 액세스 토큰 추출
//! - 서명, 토큰 종류, 만료 검증
//! - 검증 결과(`AuthOutcome`)를 request extension에 저장
//!
//! 미들웨어는 요청을 거부하지 않습니다. 보호된 핸들러가
//! `AuthenticatedAccount`를 인자로 받으면 실패 결과가 401로 변환됩니다.
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::AuthMiddleware;
//!
//! App::new()
//!     .app_data(web::Data::from(token_service))
//!     .service(
//!         web::scope("/api")
//!             .wrap(AuthMiddleware::new())
//!             .service(handlers::chirps::create_chirp) // AuthenticatedAccount 필요
//!             .service(handlers::chirps::list_chirps)  // 공개
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
