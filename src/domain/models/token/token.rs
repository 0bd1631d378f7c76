//! JWT 인증 토큰 클레임과 발급 결과
//!
//! RFC 7519 등록 클레임(`sub`, `iss`, `aud`, `exp`, `nbf`, `iat`, `jti`)과
//! 로그인 식별자(`unique_name`)를 담습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 사용자 ID
    pub sub: String,
    /// 로그인 이메일
    pub unique_name: String,
    /// 토큰 고유 ID
    pub jti: String,
    pub iss: String,
    pub aud: String,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
}

/// 발급된 토큰과 유효 구간
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: String,
    pub created: DateTime<Utc>,
    pub expiration: DateTime<Utc>,
    pub claims: TokenClaims,
}
