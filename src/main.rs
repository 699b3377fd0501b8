//! 회원가입 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 사용자 저장소와 서비스를 초기화합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use user_registration_service::config::{
    Environment, RateLimitConfig, RegistrationConfig, ServerConfig, StorageConfig,
};
use user_registration_service::core::clock::DefaultClock;
use user_registration_service::db::{JsonFileStore, UserStore};
use user_registration_service::handlers::users::{not_found, BodyLimit};
use user_registration_service::repositories::users::UserRepository;
use user_registration_service::routes::configure_all_routes;
use user_registration_service::services::users::UserService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 회원가입 서비스 시작중... (environment: {:?})", Environment::current());

    let user_service = initialize_user_service();

    info!("✅ 사용자 서비스 초기화 완료");

    start_http_server(user_service).await
}

/// 저장소 → 리포지토리 → 서비스 순서로 조립합니다.
fn initialize_user_service() -> web::Data<UserService> {
    let store: Arc<dyn UserStore> = Arc::new(JsonFileStore::new(StorageConfig::users_file()));
    info!("📁 사용자 저장소: {}", store.describe());

    let repo = Arc::new(UserRepository::new(store));

    web::Data::new(UserService::new(
        repo,
        Arc::new(DefaultClock),
        RegistrationConfig::default_image_url(),
    ))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, Rate Limiting 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, Rate Limiting 설정 오류 또는 서버 실행 오류
async fn start_http_server(user_service: web::Data<UserService>) -> io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());
    let body_limit = BodyLimit(ServerConfig::max_body_bytes());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Registration: POST http://{}/users", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            error!("잘못된 Rate Limiting 설정: {:?}", rate_limit_config);
            io::Error::new(io::ErrorKind::InvalidInput, "invalid rate limit configuration")
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );
    info!("📦 요청 본문 최대 크기: {} bytes", body_limit.0);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .app_data(user_service.clone())
            .app_data(body_limit)
            .configure(configure_all_routes)
            .default_service(web::to(not_found))
    })
    .bind(bind_address)?
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 이전에 실행되므로 결과는 stderr로 직접 출력합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    match loaded {
        Ok(file) => eprintln!("[profile: {}] {} 파일 로드 됨", profile, file),
        Err(e) => eprintln!("[profile: {}] 환경 파일 로드 실패: {}", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=user_registration_service=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 로컬 프론트엔드 개발 서버와의 통신을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
