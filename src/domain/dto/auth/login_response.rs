//! 로그인 응답 DTO
use serde::Serialize;
use crate::domain::models::token::IssuedToken;

/// 응답에 쓰는 시각 형식 (`yyyy-MM-dd HH:mm:ss`, UTC)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 로그인 성공 응답
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub authenticated: bool,
    pub created: String,
    pub expiration: String,
    pub access_token: String,
    pub user_name: String,
    pub message: String,
}

impl LoginResponse {
    pub fn from_token(token: &IssuedToken, user_name: impl Into<String>) -> Self {
        Self {
            authenticated: true,
            created: token.created.format(TIMESTAMP_FORMAT).to_string(),
            expiration: token.expiration.format(TIMESTAMP_FORMAT).to_string(),
            access_token: token.access_token.clone(),
            user_name: user_name.into(),
            message: "User Logged in".to_string(),
        }
    }
}

/// 로그인 실패 응답 (401)
#[derive(Debug, Clone, Serialize)]
pub struct LoginRejection {
    pub authenticated: bool,
    pub message: String,
}

impl LoginRejection {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            authenticated: false,
            message: message.into(),
        }
    }
}
