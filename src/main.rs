//! 계정 관리 서비스 메인 애플리케이션
//!
//! `STORAGE_BACKEND`에 따라 MongoDB + Redis 또는 메모리 저장소로 모듈을 조립하고
//! Actix-web HTTP 서버를 구동합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use env_logger::Env;
use log::{info, warn};
use account_service_backend::caching::redis::RedisClient;
use account_service_backend::config::{
    HttpConfig, PasswordConfig, ServerConfig, StorageBackend, StorageConfig,
};
use account_service_backend::core::AccountModule;
use account_service_backend::db::Database;
use account_service_backend::services::auth::TokenService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 계정 서비스 시작중...");

    let module = build_module().await?;
    module.bootstrap(StorageConfig::admin_email().as_deref())
        .await
        .map_err(|e| std::io::Error::other(format!("초기 데이터 준비 실패: {}", e)))?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(module).await
}

/// 저장소 백엔드를 선택하고 서비스 모듈을 조립합니다
async fn build_module() -> std::io::Result<AccountModule> {
    let token_service = TokenService::from_config()
        .map_err(|e| std::io::Error::other(format!("토큰 설정 오류: {}", e)))?;
    let token_service = Arc::new(token_service);
    let bcrypt_cost = PasswordConfig::bcrypt_cost();

    match StorageConfig::backend() {
        StorageBackend::Memory => {
            warn!("🧠 메모리 저장소 사용: 재시작하면 데이터가 사라집니다");
            Ok(AccountModule::in_memory(token_service, bcrypt_cost))
        }
        StorageBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::new()
                .await
                .map_err(|e| std::io::Error::other(format!("데이터베이스 연결 실패: {}", e)))?;
            info!("✅ MongoDB 연결 성공");

            let redis_client = RedisClient::new()
                .await
                .map_err(|e| std::io::Error::other(format!("Redis 연결 실패: {}", e)))?;
            info!("✅ Redis 연결 성공");

            AccountModule::with_mongo(Arc::new(database), Arc::new(redis_client), token_service, bcrypt_cost)
                .await
                .map_err(|e| std::io::Error::other(format!("저장소 초기화 실패: {}", e)))
        }
    }
}

/// CORS, 로깅, 경로 정규화, Rate Limiting을 갖춘 HTTP 서버를 실행합니다
async fn start_http_server(module: AccountModule) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let per_second = HttpConfig::rate_limit_per_second();
    let burst_size = HttpConfig::rate_limit_burst_size();
    let origins = HttpConfig::cors_allowed_origins();

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(per_second)
        .burst_size(burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!("🛡️ Rate Limiting: 초당 {}요청, 버스트 {}개", per_second, burst_size);
    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        let module = module.clone();

        App::new()
            // Rate Limiting이 가장 바깥
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(move |cfg| module.configure(cfg))
    })
        .bind(bind_address)?
        .workers(4)
        .run()
        .await
}

/// `PROFILE`(dev | prod)에 맞는 `.env` 파일을 읽습니다
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let file = match profile.as_str() {
        "prod" => Some(".env.prod"),
        "dev" => Some(".env.dev"),
        _ => None,
    };

    // 로거 초기화 전이므로 결과는 stderr로만 남깁니다
    match file {
        Some(name) => {
            if let Err(e) = dotenv::from_filename(name) {
                eprintln!("{} 파일 로드 실패: {}", name, e);
            }
        }
        None => {
            dotenv::dotenv().ok();
        }
    }
}

/// `RUST_LOG` 기반 로깅 초기화 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

fn configure_cors(origins: &[String]) -> Cors {
    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}
