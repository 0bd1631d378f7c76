//! 사용자 REST API 백엔드
//!
//! 서명된 Bearer 토큰으로 보호되는 사용자 CRUD 서비스입니다.
//!
//! # Features
//!
//! - **토큰 인증**: 이메일 로그인 후 RS256/HS256 서명 토큰 발급, 허용 오차 0초 검증
//! - **제네릭 리포지토리**: 엔티티 타입으로 매개변수화된 CRUD + 로그인 조회
//! - **매퍼 레지스트리**: 타입 쌍 기반 엔티티/모델/DTO 변환
//! - **MongoDB / 메모리 저장소**: 같은 리포지토리 계약의 두 구현
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + 인증 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리 (DTO)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, 매핑, 토큰 발급
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 엔티티 영속화
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB / 메모리 │
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_api_backend::core::AppContext;
//! use user_api_backend::domain::dto::LoginDto;
//!
//! let context = AppContext::from_env().await?;
//! let response = context.login_service().login(&LoginDto::new("a@b.com")).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod mapping;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
