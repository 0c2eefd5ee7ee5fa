//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 도메인별로 모듈화되어 사용자 관리, 인증/보안, 게시글, 외부 웹훅을
//! 담당합니다. 모든 서비스는 동기 API이며, 핸들러가 `web::block`으로
//! 블로킹 스레드 풀에서 호출합니다.
//!
//! 서비스 인스턴스는 [`ServiceContainer`]가 한 번 조립하여 `web::Data`로
//! 각 워커에 공유합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::ServiceContainer;
//!
//! let store = Arc::new(DocumentStore::initialize(StoreConfig::path())?);
//! let services = ServiceContainer::from_env(store)?;
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .configure(|cfg| services.register(cfg))
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod auth;
pub mod chirps;
pub mod users;
pub mod webhooks;

use std::sync::Arc;

use actix_web::web;
use log::info;

use crate::config::{JwtConfig, PasswordConfig, PolkaConfig};
use crate::db::DocumentStore;
use crate::errors::AppResult;
use crate::repositories::{chirps::ChirpRepository, tokens::TokenRepository, users::UserRepository};

use auth::{PasswordService, TokenService};
use chirps::ChirpService;
use users::UserService;
use webhooks::PolkaService;

/// 애플리케이션 서비스 묶음
///
/// 모든 필드는 `Arc`이므로 복제 비용이 작습니다.
#[derive(Clone)]
pub struct ServiceContainer {
    pub user_service: Arc<UserService>,
    pub token_service: Arc<TokenService>,
    pub chirp_service: Arc<ChirpService>,
    pub polka_service: Arc<PolkaService>,
}

impl ServiceContainer {
    /// 주어진 설정값으로 리포지토리와 서비스를 조립합니다.
    pub fn build(
        store: Arc<DocumentStore>,
        jwt_secret: &str,
        polka_api_key: Option<String>,
        password_service: PasswordService,
    ) -> Self {
        let user_repo = Arc::new(UserRepository::new(Arc::clone(&store)));
        let chirp_repo = Arc::new(ChirpRepository::new(Arc::clone(&store)));
        let token_repo = Arc::new(TokenRepository::new(store));

        let user_service = Arc::new(UserService::new(user_repo, password_service));
        let token_service = Arc::new(TokenService::new(jwt_secret, token_repo));
        let chirp_service = Arc::new(ChirpService::new(chirp_repo));
        let polka_service = Arc::new(PolkaService::new(
            polka_api_key,
            Arc::clone(&user_service),
        ));

        Self {
            user_service,
            token_service,
            chirp_service,
            polka_service,
        }
    }

    /// 환경 변수 설정으로 조립합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - `JWT_SECRET` 누락
    pub fn from_env(store: Arc<DocumentStore>) -> AppResult<Self> {
        let secret = JwtConfig::secret()?;
        let polka_key = PolkaConfig::api_key();
        let cost = PasswordConfig::bcrypt_cost();

        info!(
            "서비스 초기화: bcrypt cost {}, 웹훅 {}",
            cost,
            if polka_key.is_some() { "활성" } else { "비활성" }
        );

        Ok(Self::build(store, &secret, polka_key, PasswordService::new(cost)))
    }

    /// 각 서비스를 `web::Data`로 등록합니다.
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::from(Arc::clone(&self.user_service)))
            .app_data(web::Data::from(Arc::clone(&self.token_service)))
            .app_data(web::Data::from(Arc::clone(&self.chirp_service)))
            .app_data(web::Data::from(Arc::clone(&self.polka_service)));
    }
}
