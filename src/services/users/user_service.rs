//! # 사용자 관리 서비스 구현
//!
//! 사용자 조회/생성/수정/삭제 비즈니스 로직입니다.
//!
//! ## 변환 흐름
//!
//! ```text
//! 요청 DTO ──validate_dto──▶ UserModel ──▶ UserEntity ──▶ Repository
//!                                                           │
//! 응답 DTO ◀──────────────── MapperRegistry ◀────────────────┘
//! ```
//!
//! 엔티티는 이 서비스 밖으로 나가지 않습니다.
//! 저장소의 "없음" 결과는 여기서 `AppError::NotFound`로 바뀝니다.

use std::sync::Arc;
use futures_util::TryStreamExt;
use log::{debug, info};
use uuid::Uuid;
use crate::domain::dto::{
    UserDto, UserDtoCreate, UserDtoCreateResult, UserDtoUpdate, UserDtoUpdateResult, validate_dto,
};
use crate::domain::entities::UserEntity;
use crate::domain::models::UserModel;
use crate::errors::{AppError, AppResult};
use crate::mapping::MapperRegistry;
use crate::repositories::UserRepository;

fn user_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id))
}

/// 작업 단위 하나에 묶인 사용자 서비스
///
/// ```rust,ignore
/// let service = context.user_service();
/// let created = service.create(request).await?;
/// let found = service.get(created.id).await?;
/// ```
pub struct UserService {
    users: Box<dyn UserRepository>,
    mapper: Arc<MapperRegistry>,
}

impl UserService {
    pub fn new(users: Box<dyn UserRepository>, mapper: Arc<MapperRegistry>) -> Self {
        Self { users, mapper }
    }

    fn to_dto(&self, entity: &UserEntity) -> AppResult<UserDto> {
        let model: UserModel = self.mapper.convert(entity)?;
        self.mapper.convert(&model)
    }

    fn to_entity<D: 'static>(&self, request: &D) -> AppResult<UserEntity> {
        let model: UserModel = self.mapper.convert(request)?;
        self.mapper.convert(&model)
    }

    /// ID로 사용자를 조회합니다.
    ///
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 없음
    pub async fn get(&self, id: Uuid) -> AppResult<UserDto> {
        let entity = self.users.get_by_id(id).await?.ok_or_else(|| user_not_found(id))?;
        self.to_dto(&entity)
    }

    pub async fn list(&self) -> AppResult<Vec<UserDto>> {
        let entities: Vec<UserEntity> = self.users.list(None).await?.try_collect().await?;
        debug!("사용자 목록 조회: {}건", entities.len());

        let models: Vec<UserModel> = self.mapper.convert_all(&entities)?;
        self.mapper.convert_all(&models)
    }

    /// 새 사용자를 등록합니다.
    ///
    /// * `Err(AppError::ValidationError)` - 이름/이메일 규칙 위반
    /// * `Err(AppError::StorageFault)` - 이메일 중복(`ConstraintViolation`) 등 저장소 장애
    pub async fn create(&self, request: UserDtoCreate) -> AppResult<UserDtoCreateResult> {
        validate_dto(&request)?;

        let entity = self.to_entity(&request)?;
        let saved = self.users.add(entity).await?;
        info!("사용자 생성: {:?}", saved.id);

        self.mapper.convert(&saved)
    }

    /// 기존 사용자를 수정합니다.
    ///
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 없음
    pub async fn update(&self, request: UserDtoUpdate) -> AppResult<UserDtoUpdateResult> {
        validate_dto(&request)?;

        let id = request.id;
        let entity = self.to_entity(&request)?;
        let updated = self.users.update(entity).await?.ok_or_else(|| user_not_found(id))?;
        info!("사용자 수정: {}", id);

        self.mapper.convert(&updated)
    }

    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 없음
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.users.delete(id).await? {
            return Err(user_not_found(id));
        }

        info!("사용자 삭제: {}", id);
        Ok(())
    }
}
