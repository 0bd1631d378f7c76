//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 요청마다 [`crate::core::AppContext`]에서 새로 만들어집니다.
//! 각 서비스는 그 요청 전용 리포지토리 스코프 하나와, 공유 읽기 전용 구성요소
//! (인증 게이트, 매퍼 레지스트리)를 `Arc`로 들고 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! let login = context.login_service();
//! let response = login.login(&LoginDto::new("a@b.com")).await?;
//! ```

pub mod auth;
pub mod users;

pub use auth::{AuthenticationGate, LoginService, RejectReason};
pub use users::UserService;
