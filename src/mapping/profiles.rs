//! 사용자 변환 규칙
//!
//! 모든 변환은 순수 함수입니다. 공유 필드는 그대로 옮기고,
//! 대상에 없는 필드는 버리며, 원본에 없는 필드는 기본값(`None`, nil UUID)으로 채웁니다.
//! 엔티티의 `id: None`과 모델/DTO의 nil UUID는 같은 "미할당" 상태를 뜻합니다.

use uuid::Uuid;
use crate::domain::dto::{
    UserDto, UserDtoCreate, UserDtoCreateResult, UserDtoUpdate, UserDtoUpdateResult,
};
use crate::domain::entities::UserEntity;
use crate::domain::models::UserModel;
use crate::errors::AppResult;
use crate::mapping::registry::{MapperRegistry, MapperRegistryBuilder};

fn assigned(id: Uuid) -> Option<Uuid> {
    (!id.is_nil()).then_some(id)
}

// UserEntity <-> UserModel

pub fn entity_to_model(entity: &UserEntity) -> UserModel {
    UserModel {
        id: entity.id.unwrap_or_default(),
        name: entity.name.clone(),
        email: entity.email.clone(),
        create_at: entity.create_at,
        update_at: entity.update_at,
    }
}

pub fn model_to_entity(model: &UserModel) -> UserEntity {
    UserEntity {
        id: assigned(model.id),
        name: model.name.clone(),
        email: model.email.clone(),
        create_at: model.create_at,
        update_at: model.update_at,
    }
}

// UserDto 계열 <-> UserEntity

pub fn entity_to_dto(entity: &UserEntity) -> UserDto {
    UserDto {
        id: entity.id.unwrap_or_default(),
        name: entity.name.clone(),
        email: entity.email.clone(),
    }
}

pub fn dto_to_entity(dto: &UserDto) -> UserEntity {
    UserEntity {
        id: assigned(dto.id),
        name: dto.name.clone(),
        email: dto.email.clone(),
        ..UserEntity::default()
    }
}

pub fn entity_to_create_result(entity: &UserEntity) -> UserDtoCreateResult {
    UserDtoCreateResult {
        id: entity.id.unwrap_or_default(),
        name: entity.name.clone(),
        email: entity.email.clone(),
        create_at: entity.create_at,
    }
}

pub fn create_result_to_entity(dto: &UserDtoCreateResult) -> UserEntity {
    UserEntity {
        id: assigned(dto.id),
        name: dto.name.clone(),
        email: dto.email.clone(),
        create_at: dto.create_at,
        update_at: None,
    }
}

pub fn entity_to_update_result(entity: &UserEntity) -> UserDtoUpdateResult {
    UserDtoUpdateResult {
        id: entity.id.unwrap_or_default(),
        name: entity.name.clone(),
        email: entity.email.clone(),
        update_at: entity.update_at,
    }
}

pub fn update_result_to_entity(dto: &UserDtoUpdateResult) -> UserEntity {
    UserEntity {
        id: assigned(dto.id),
        name: dto.name.clone(),
        email: dto.email.clone(),
        create_at: None,
        update_at: dto.update_at,
    }
}

// UserModel <-> 요청/조회 DTO

pub fn model_to_dto(model: &UserModel) -> UserDto {
    UserDto {
        id: model.id,
        name: model.name.clone(),
        email: model.email.clone(),
    }
}

pub fn dto_to_model(dto: &UserDto) -> UserModel {
    UserModel {
        id: dto.id,
        name: dto.name.clone(),
        email: dto.email.clone(),
        ..UserModel::default()
    }
}

pub fn model_to_create(model: &UserModel) -> UserDtoCreate {
    UserDtoCreate {
        name: model.name.clone(),
        email: model.email.clone(),
    }
}

pub fn create_to_model(dto: &UserDtoCreate) -> UserModel {
    UserModel::new(dto.name.clone(), dto.email.clone())
}

pub fn model_to_update(model: &UserModel) -> UserDtoUpdate {
    UserDtoUpdate {
        id: model.id,
        name: model.name.clone(),
        email: model.email.clone(),
    }
}

pub fn update_to_model(dto: &UserDtoUpdate) -> UserModel {
    UserModel {
        id: dto.id,
        name: dto.name.clone(),
        email: dto.email.clone(),
        ..UserModel::default()
    }
}

/// 사용자 관련 매핑 쌍을 모두 등록합니다.
pub fn register_user_profile(builder: MapperRegistryBuilder) -> AppResult<MapperRegistryBuilder> {
    builder
        .register(entity_to_model, model_to_entity)?
        .register(entity_to_dto, dto_to_entity)?
        .register(entity_to_create_result, create_result_to_entity)?
        .register(entity_to_update_result, update_result_to_entity)?
        .register(model_to_dto, dto_to_model)?
        .register(model_to_create, create_to_model)?
        .register(model_to_update, update_to_model)
}

/// 애플리케이션 전체 레지스트리를 만듭니다. 시작 시 한 번 호출됩니다.
pub fn build_registry() -> AppResult<MapperRegistry> {
    let builder = register_user_profile(MapperRegistryBuilder::new())?;
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn stored_entity() -> UserEntity {
        UserEntity {
            id: Some(Uuid::new_v4()),
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            create_at: Some(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()),
            update_at: Some(Utc.with_ymd_and_hms(2024, 2, 3, 4, 5, 6).unwrap()),
        }
    }

    #[test]
    fn test_registry_contains_every_pair_in_both_directions() {
        let registry = build_registry().unwrap();

        assert_eq!(registry.len(), 14);
        assert!(registry.contains::<UserEntity, UserModel>());
        assert!(registry.contains::<UserModel, UserEntity>());
        assert!(registry.contains::<UserEntity, UserDtoCreateResult>());
        assert!(registry.contains::<UserDtoUpdate, UserModel>());
        assert!(!registry.contains::<UserDtoCreate, UserEntity>());
    }

    #[test]
    fn test_entity_model_entity_round_trip_is_exact() {
        let registry = build_registry().unwrap();
        let entity = stored_entity();

        let model: UserModel = registry.convert(&entity).unwrap();
        let back: UserEntity = registry.convert(&model).unwrap();

        assert_eq!(back, entity);
    }

    #[test]
    fn test_unsaved_entity_round_trip_keeps_identity_unassigned() {
        let entity = UserEntity::new("Ana", "ana@x.com");
        let model = entity_to_model(&entity);

        assert!(!model.is_persisted());
        assert_eq!(model_to_entity(&model), entity);
    }

    #[test]
    fn test_dto_drops_audit_fields() {
        let entity = stored_entity();
        let dto = entity_to_dto(&entity);

        assert_eq!(dto.id, entity.id.unwrap());
        assert_eq!(dto.name, "Ana");

        let back = dto_to_entity(&dto);
        assert_eq!(back.create_at, None);
        assert_eq!(back.update_at, None);
        assert_eq!(back.id, entity.id);
    }

    #[test]
    fn test_result_dtos_keep_their_own_timestamp_only() {
        let entity = stored_entity();

        let created = entity_to_create_result(&entity);
        assert_eq!(created.create_at, entity.create_at);
        assert_eq!(create_result_to_entity(&created).update_at, None);

        let updated = entity_to_update_result(&entity);
        assert_eq!(updated.update_at, entity.update_at);
        assert_eq!(update_result_to_entity(&updated).create_at, None);
    }

    #[test]
    fn test_request_dto_round_trips_shared_fields() {
        let registry = build_registry().unwrap();
        let request = UserDtoUpdate {
            id: Uuid::new_v4(),
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
        };

        let model: UserModel = registry.convert(&request).unwrap();
        let back: UserDtoUpdate = registry.convert(&model).unwrap();
        assert_eq!(back, request);

        let create = UserDtoCreate {
            name: "Bia".to_string(),
            email: "bia@x.com".to_string(),
        };
        let model: UserModel = registry.convert(&create).unwrap();
        assert!(model.id.is_nil());
        assert_eq!(model_to_create(&model), create);
    }
}
