//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정은 프로세스 시작 시 한 번 읽혀 불변 값으로 고정되고,
//! 이후에는 잠금 없이 여러 요청에서 공유됩니다.
//!
//! ## 모듈 구성
//!
//! - [`token_config`] - 토큰 발급자/대상/유효 기간 (`TokenConfiguration`)
//! - [`signing_config`] - 토큰 서명/검증 키 (`SigningConfiguration`)
//! - [`data_config`] - 서버, 저장소, Rate Limiting 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수
//!
//! ```bash
//! export TOKEN_CONFIGURATIONS_ISSUER="ExemploIssuer"
//! export TOKEN_CONFIGURATIONS_AUDIENCE="ExemploAudience"
//! export TOKEN_CONFIGURATIONS_SECONDS="28800"
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! export JWT_PRIVATE_KEY_PATH="./secrets/jwt_private_key.pem"  # RS256 키 파일
//! export JWT_SECRET="at-least-32-bytes-of-secret-material"   # HS256 비밀키
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="dbAPI"
//! export STORAGE_BACKEND="mongo"                              # mongo | memory
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000,http://127.0.0.1:3000"
//! ```
//!
//! 필수 값이 빠지면 기본값으로 대체하지 않고 `ConfigurationFault`로 시작을 중단합니다.

pub mod data_config;
pub mod signing_config;
pub mod token_config;

pub use data_config::*;
pub use signing_config::*;
pub use token_config::*;
