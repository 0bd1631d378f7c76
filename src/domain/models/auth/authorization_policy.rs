//! 이름 붙은 인가 정책
//!
//! 보호된 라우트는 정책 이름으로 인증 요구 사항을 선언합니다.
//! 현재 정책은 `"Bearer"` 하나이며, 유효한 Bearer 토큰으로 인증된 사용자만 통과시킵니다.

/// 인가 정책
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorizationPolicy {
    name: &'static str,
    scheme: &'static str,
}

impl AuthorizationPolicy {
    /// Bearer 스킴으로 인증된 사용자를 요구하는 정책
    pub const BEARER: AuthorizationPolicy = AuthorizationPolicy {
        name: "Bearer",
        scheme: "Bearer",
    };

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// `Authorization` 헤더에서 기대하는 스킴 이름
    pub fn scheme(&self) -> &'static str {
        self.scheme
    }
}

impl Default for AuthorizationPolicy {
    fn default() -> Self {
        Self::BEARER
    }
}
