//! 에러 모듈
//!
//! 애플리케이션 전역 에러 타입 [`AppError`](errors::AppError)와 관련 헬퍼를 제공합니다.

pub mod errors;

pub use errors::{AppError, AppResult, ErrorContext, FieldError, StorageFaultKind};
