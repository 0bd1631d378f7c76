//! 인증된 호출자 정보
//!
//! 인증 게이트가 토큰 검증을 마친 뒤 요청 확장(extensions)에 넣어두는 값입니다.
//! 핸들러는 추출자로 바로 받아 쓸 수 있습니다.

use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::models::token::TokenClaims;

/// 검증된 토큰에서 꺼낸 신원 클레임
///
/// # 핸들러에서 사용
///
/// ```rust,ignore
/// #[get("/me")]
/// async fn me(user: AuthenticatedUser) -> HttpResponse {
///     HttpResponse::Ok().json(user)
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// `sub` 클레임 (사용자 ID)
    pub user_id: String,

    /// `unique_name` 클레임 (로그인 이메일)
    pub email: String,

    /// `jti` 클레임
    pub token_id: String,

    pub expires_at: DateTime<Utc>,
}

impl From<TokenClaims> for AuthenticatedUser {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.unique_name,
            token_id: claims.jti,
            expires_at: DateTime::from_timestamp(claims.exp, 0).unwrap_or_default(),
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}
