//! Chirpy 게시글 서비스 메인 애플리케이션
//!
//! 스냅샷 파일 저장소와 모든 서비스를 초기화하고 Actix-web HTTP 서버를 구동합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware, App, HttpServer};
use env_logger::Env;
use log::{error, info};

use chirpy_service::config::{ServerConfig, StoreConfig};
use chirpy_service::db::DocumentStore;
use chirpy_service::routes::configure_all_routes;
use chirpy_service::services::ServiceContainer;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 로거 초기화 전에 .env를 읽어야 RUST_LOG가 적용됨
    let env_message = load_env_file();
    init_logging();
    info!("{}", env_message);

    info!("🚀 Chirpy 서비스 시작중...");

    let store = initialize_store()?;

    let services = ServiceContainer::from_env(store).map_err(|e| {
        error!("서비스 초기화 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(services).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 접근 로그 미들웨어를 적용하고 `/api` 라우트를 등록합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(services: ServiceContainer) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    info!("🌐 서버가 http://{} 에서 실행중입니다 (워커 {}개)", bind_address, workers);
    info!("📍 Health check: http://{}/api/healthz", bind_address);

    HttpServer::new(move || {
        let services = services.clone();

        App::new()
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .configure(move |cfg| services.register(cfg))
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(workers)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// 로거가 아직 없으므로 결과 메시지를 돌려주고 호출자가 기록합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() -> String {
    let profile = std::env::var("PROFILE").unwrap_or_default();

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => ".env.prod 파일 로드 됨".to_string(),
            Err(e) => format!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => ".env.dev 파일 로드 됨".to_string(),
            Err(e) => format!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => match dotenv::dotenv() {
            Ok(_) => "기본 .env 파일 로드".to_string(),
            Err(_) => ".env 파일 없음, 프로세스 환경 변수 사용".to_string(),
        },
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// 스냅샷 파일 저장소를 엽니다
///
/// 파일이 없으면 빈 스냅샷으로 생성하고, 손상된 파일은 덮어쓰지 않고 실패합니다.
fn initialize_store() -> io::Result<Arc<DocumentStore>> {
    let path = StoreConfig::path();
    info!("📂 데이터 파일: {}", path.display());

    DocumentStore::initialize(path.clone()).map(Arc::new).map_err(|e| {
        error!("데이터 파일 초기화 실패: {}", e);
        io::Error::other(e.to_string())
    })
}

/// 허용 범위가 넓은 CORS 설정
///
/// 모든 Origin과 헤더, GET/POST/PUT/DELETE/OPTIONS 메서드를 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allow_any_header()
        .max_age(3600)
}
