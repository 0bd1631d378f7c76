//! 사용자 API 서버 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 구성요소를 초기화합니다.

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use user_api_backend::config::{RateLimitConfig, ServerConfig};
use user_api_backend::core::AppContext;
use user_api_backend::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 로깅을 먼저 켜야 환경 파일 로드 결과가 남는다
    init_logging();
    load_env_file();

    info!("🚀 사용자 API 서비스 시작중...");

    // 구성요소 초기화. 실패하면 서버를 시작하지 않는다
    let context = match AppContext::from_env().await {
        Ok(context) => context,
        Err(e) => {
            error!("❌ 초기화 실패: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    info!("✅ 모든 구성요소가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(context).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, Rate Limiting, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(context: AppContext) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 공유 구성요소 + 라우트 설정
            .configure(|cfg| context.configure(cfg))
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .run()
        .await
}

/// `PROFILE`에 맞는 `.env` 파일을 로드합니다
///
/// | PROFILE | 파일 |
/// |---------|------|
/// | `dev` (기본값) | `.env.dev` |
/// | `prod` | `.env.prod` |
/// | 기타 | `.env` |
///
/// 파일이 없어도 시작은 계속됩니다. 이미 설정된 환경 변수가 우선합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "dev" | "prod" => {
            let file = format!(".env.{}", profile);
            dotenv::from_filename(&file).map(|_| file)
        }
        _ => dotenv().map(|path| path.display().to_string()),
    };

    match loaded {
        Ok(file) => info!("프로필 '{}': {} 로드", profile, file),
        Err(e) => warn!("프로필 '{}': 환경 파일 로드 실패 ({}), 프로세스 환경 변수만 사용합니다", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 허용 출처는 [`ServerConfig::allowed_origins`]에서 읽습니다.
fn configure_cors() -> Cors {
    ServerConfig::allowed_origins()
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
