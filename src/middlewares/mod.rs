//! HTTP 미들웨어 모듈
//!
//! - [`AuthMiddleware`] - 인가 정책을 요구하는 Bearer 토큰 인증

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
