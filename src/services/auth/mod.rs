//! 인증 서비스 모듈
//!
//! - [`AuthenticationGate`] - Bearer 토큰 발급과 검증
//! - [`LoginService`] - 이메일 로그인 후 토큰 발급
//!
//! # Examples
//!
//! ```rust,ignore
//! let issued = gate.issue(&user_id, "a@b.com")?;
//! let user = gate.authenticate(Some("Bearer eyJ..."))?;
//! ```

pub mod authentication_gate;
pub mod login_service;

pub use authentication_gate::{AuthenticationGate, RejectReason};
pub use login_service::{LOGIN_FAILED, LoginService};
