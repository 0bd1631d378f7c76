//! Bearer 토큰 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 [`AuthenticationGate`](crate::services::auth::AuthenticationGate)로
//! 토큰을 검증하고, 성공하면 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)를
//! 요청 확장에 넣습니다. 실패하면 핸들러를 호출하지 않고 401을 돌려줍니다.
//!
//! 게이트는 `web::Data<AuthenticationGate>`로 앱 데이터에 등록되어 있어야 합니다.
//!
//! ```rust,ignore
//! web::scope("/users")
//!     .wrap(AuthMiddleware::bearer())
//!     .service(list_users)
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::models::auth::AuthorizationPolicy;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// Bearer 토큰 인증 미들웨어
pub struct AuthMiddleware {
    /// 요구하는 인가 정책
    policy: AuthorizationPolicy,
}

impl AuthMiddleware {
    pub fn new(policy: AuthorizationPolicy) -> Self {
        Self { policy }
    }

    /// `"Bearer"` 정책을 요구하는 미들웨어
    pub fn bearer() -> Self {
        Self::new(AuthorizationPolicy::BEARER)
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            policy: self.policy,
        }))
    }
}
