//! 사용자 관리 서비스 모듈
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let service = context.user_service();
//! let users = service.list().await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
