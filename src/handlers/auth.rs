//! 로그인 핸들러

use actix_web::{post, web, HttpResponse};
use crate::core::AppContext;
use crate::domain::dto::{LoginDto, LoginRejection};
use crate::errors::AppError;

/// 이메일 로그인
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/login \
///   -H "Content-Type: application/json" \
///   -d '{"email":"a@b.com"}'
/// ```
///
/// 일치하는 사용자가 없으면 `401 {"authenticated": false, "message": ...}`를 돌려줍니다.
#[post("/login")]
pub async fn login(
    context: web::Data<AppContext>,
    payload: web::Json<LoginDto>,
) -> Result<HttpResponse, AppError> {
    match context.login_service().login(&payload).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(AppError::AuthenticationError(message)) => {
            Ok(HttpResponse::Unauthorized().json(LoginRejection::new(message)))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test};
    use actix_web::http::StatusCode;
    use serde_json::{Value, json};
    use crate::config::{SigningConfiguration, TokenConfiguration};
    use crate::core::AppContext;
    use crate::domain::dto::UserDtoCreate;
    use crate::routes::configure_all_routes;

    fn context() -> AppContext {
        AppContext::in_memory(
            SigningConfiguration::from_secret(b"0123456789abcdef0123456789abcdef").unwrap(),
            TokenConfiguration::new("ExemploIssuer", "ExemploAudience", 60).unwrap(),
        )
        .unwrap()
    }

    #[actix_web::test]
    async fn test_login_returns_token_for_known_email() {
        let context = context();
        let created = context
            .user_service()
            .create(UserDtoCreate { name: "A".to_string(), email: "a@b.com".to_string() })
            .await
            .unwrap();

        let app = test::init_service(
            App::new().configure(|cfg| context.configure(cfg)).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({ "email": "a@b.com" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["authenticated"], true);
        assert_eq!(body["user_name"], "a@b.com");

        let token = body["access_token"].as_str().unwrap();
        let claims = context.gate().verify(token).unwrap();
        assert_eq!(claims.sub, created.id.to_string());
    }

    #[actix_web::test]
    async fn test_login_with_unknown_email_is_401() {
        let context = context();
        let app = test::init_service(
            App::new().configure(|cfg| context.configure(cfg)).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({ "email": "nouser@b.com" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["authenticated"], false);
    }

    #[actix_web::test]
    async fn test_login_with_malformed_email_is_400() {
        let context = context();
        let app = test::init_service(
            App::new().configure(|cfg| context.configure(cfg)).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({ "email": "not-an-email" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["details"][0]["field"], "email");
    }
}
