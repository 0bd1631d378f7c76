//! # Domain Models Module
//!
//! 비즈니스 로직이 다루는 모델과 인증 관련 값 객체들입니다.
//!
//! - [`users`] - 사용자 비즈니스 표현 (`UserModel`)
//! - [`auth`] - 인증된 호출자 정보와 인가 정책
//! - [`token`] - 토큰 클레임과 발급 결과

pub mod auth;
pub mod token;
pub mod users;

pub use auth::*;
pub use token::*;
pub use users::*;
