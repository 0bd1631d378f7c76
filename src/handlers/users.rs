//! 사용자 CRUD 핸들러
//!
//! 모든 엔드포인트는 `/api/v1/users` 스코프에 있고 Bearer 정책으로 보호됩니다.
//!
//! | Method | Path | 성공 | 실패 |
//! |--------|------|------|------|
//! | GET | `/api/v1/users` | 200 `[UserDto]` | 401 |
//! | GET | `/api/v1/users/{id}` | 200 `UserDto` | 400, 401, 404 |
//! | POST | `/api/v1/users` | 201 `UserDtoCreateResult` | 400, 401, 409 |
//! | PUT | `/api/v1/users` | 200 `UserDtoUpdateResult` | 400, 401, 404 |
//! | DELETE | `/api/v1/users/{id}` | 204 | 400, 401, 404 |

use actix_web::{delete, get, post, put, web, HttpResponse};
use uuid::Uuid;
use crate::core::AppContext;
use crate::domain::dto::{UserDtoCreate, UserDtoUpdate};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;

#[get("")]
pub async fn list_users(context: web::Data<AppContext>) -> Result<HttpResponse, AppError> {
    let users = context.user_service().list().await?;
    Ok(HttpResponse::Ok().json(users))
}

#[get("/{user_id}")]
pub async fn get_user(
    context: web::Data<AppContext>,
    user_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let user = context.user_service().get(user_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[post("")]
pub async fn create_user(
    context: web::Data<AppContext>,
    caller: AuthenticatedUser,
    payload: web::Json<UserDtoCreate>,
) -> Result<HttpResponse, AppError> {
    let created = context.user_service().create(payload.into_inner()).await?;
    log::info!("사용자 {} 생성 (요청자: {})", created.id, caller.user_id);

    Ok(HttpResponse::Created().json(created))
}

#[put("")]
pub async fn update_user(
    context: web::Data<AppContext>,
    caller: AuthenticatedUser,
    payload: web::Json<UserDtoUpdate>,
) -> Result<HttpResponse, AppError> {
    let updated = context.user_service().update(payload.into_inner()).await?;
    log::info!("사용자 {} 수정 (요청자: {})", updated.id, caller.user_id);

    Ok(HttpResponse::Ok().json(updated))
}

#[delete("/{user_id}")]
pub async fn delete_user(
    context: web::Data<AppContext>,
    caller: AuthenticatedUser,
    user_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let user_id = user_id.into_inner();
    context.user_service().delete(user_id).await?;
    log::info!("사용자 {} 삭제 (요청자: {})", user_id, caller.user_id);

    Ok(HttpResponse::NoContent().finish())
}
