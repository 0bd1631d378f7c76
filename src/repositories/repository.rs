//! 제네릭 리포지토리 계약

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::stream::BoxStream;
use uuid::Uuid;
use crate::domain::entities::Entity;
use crate::errors::AppResult;

/// `list`에 넘기는 필터 조건
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// `list` 결과. 한 번만 소비할 수 있으며, 다시 순회하려면 `list`를 다시 호출합니다.
pub type EntityStream<T> = BoxStream<'static, AppResult<T>>;

/// 엔티티 타입 `T`에 대한 CRUD 계약
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// 엔티티를 저장합니다.
    ///
    /// 식별자가 비어 있으면 새 v4 UUID를 할당하고, `create_at`을 현재 시각으로 기록합니다.
    async fn add(&self, entity: T) -> AppResult<T>;

    /// 같은 식별자의 엔티티를 교체합니다.
    ///
    /// 대상이 없으면 `Ok(None)`. 저장된 `create_at`은 유지되고 `update_at`은 현재 시각으로 기록됩니다.
    async fn update(&self, entity: T) -> AppResult<Option<T>>;

    /// 삭제했으면 `true`, 대상이 없었으면 `false`
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<T>>;

    async fn exists(&self, id: Uuid) -> AppResult<bool>;

    /// 조건에 맞는 엔티티를 지연 스트림으로 돌려줍니다. 조건이 없으면 전체입니다.
    async fn list(&self, predicate: Option<Predicate<T>>) -> AppResult<EntityStream<T>>;
}

pub(crate) fn matches<T>(predicate: &Option<Predicate<T>>, entity: &T) -> bool {
    predicate.as_ref().is_none_or(|p| p(entity))
}
