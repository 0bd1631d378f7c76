//! 인증/인가 모델

pub mod authenticated_user;
pub mod authorization_policy;

pub use authenticated_user::AuthenticatedUser;
pub use authorization_policy::AuthorizationPolicy;
