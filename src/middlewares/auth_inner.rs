use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header::{self, HeaderValue};
use actix_web::{Error, HttpMessage, ResponseError, web};
use futures_util::future::LocalBoxFuture;
use crate::domain::models::auth::AuthorizationPolicy;
use crate::errors::AppError;
use crate::services::auth::AuthenticationGate;

pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub policy: AuthorizationPolicy,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let policy = self.policy;

        Box::pin(async move {
            let Some(gate) = req.app_data::<web::Data<AuthenticationGate>>().cloned() else {
                log::error!("인증 게이트가 앱 데이터에 등록되지 않았습니다");
                let error = AppError::ConfigurationFault("인증 게이트가 구성되지 않았습니다".to_string());
                return Ok(reject(req, &error, None));
            };

            let authorization = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|h| h.to_str().ok());

            match gate.authenticate(authorization) {
                Ok(user) => {
                    log::debug!("인증 성공 ({}): 사용자 ID {}", policy.name(), user.user_id);
                    req.extensions_mut().insert(user);
                }
                Err(error) => return Ok(reject(req, &error, Some(policy))),
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 핸들러를 거치지 않고 에러 응답을 만듭니다.
fn reject<B>(
    req: ServiceRequest,
    error: &AppError,
    challenge: Option<AuthorizationPolicy>,
) -> ServiceResponse<EitherBody<B>> {
    let mut response = error.error_response();
    if let Some(policy) = challenge {
        response
            .headers_mut()
            .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static(policy.scheme()));
    }

    let (req, _) = req.into_parts();
    ServiceResponse::new(req, response).map_into_right_body()
}
