//! 메모리 기반 제네릭 리포지토리
//!
//! `STORAGE_BACKEND=memory`로 실행하거나 테스트에서 사용합니다.
//! [`Entity::unique_key`]가 있는 엔티티는 MongoDB 유니크 인덱스와 같은 방식으로
//! 중복을 `ConstraintViolation`으로 거부합니다.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use chrono::Utc;
use futures_util::{StreamExt, stream};
use uuid::Uuid;
use crate::domain::entities::Entity;
use crate::errors::{AppError, AppResult, StorageFaultKind};
use crate::repositories::repository::{EntityStream, Predicate, Repository, matches};

/// 여러 스코프가 공유하는 저장 공간. 삽입 순서를 유지합니다.
pub struct MemoryStore<T> {
    rows: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
        }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self {
            rows: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Vec<T>>> {
        self.rows
            .read()
            .map_err(|_| AppError::storage(StorageFaultKind::Other, "메모리 저장소 잠금이 손상되었습니다"))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Vec<T>>> {
        self.rows
            .write()
            .map_err(|_| AppError::storage(StorageFaultKind::Other, "메모리 저장소 잠금이 손상되었습니다"))
    }
}

fn duplicate_key(collection: &str, key: &str) -> AppError {
    AppError::storage(
        StorageFaultKind::ConstraintViolation,
        format!("{} 중복 키: {}", collection, key),
    )
}

/// 작업 단위 하나에 묶인 메모리 리포지토리
pub struct InMemoryRepository<T: Entity> {
    store: MemoryStore<T>,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new(store: MemoryStore<T>) -> Self {
        Self { store }
    }

    /// 조건에 맞는 첫 엔티티의 복제본
    pub(crate) fn find_first(&self, predicate: impl Fn(&T) -> bool) -> AppResult<Option<T>> {
        Ok(self.store.read()?.iter().find(|e| predicate(e)).cloned())
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn add(&self, mut entity: T) -> AppResult<T> {
        if entity.id().is_none() {
            entity.set_id(Uuid::new_v4());
        }
        entity.set_create_at(Some(Utc::now()));

        let mut rows = self.store.write()?;
        if rows.iter().any(|row| row.id() == entity.id()) {
            let id = entity.id().map(|id| id.to_string()).unwrap_or_default();
            return Err(duplicate_key(T::COLLECTION, &id));
        }
        if let Some(key) = entity.unique_key() {
            if rows.iter().any(|row| row.unique_key() == Some(key)) {
                return Err(duplicate_key(T::COLLECTION, key));
            }
        }

        rows.push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, mut entity: T) -> AppResult<Option<T>> {
        let Some(id) = entity.id() else {
            return Ok(None);
        };

        let mut rows = self.store.write()?;
        let Some(index) = rows.iter().position(|row| row.id() == Some(id)) else {
            return Ok(None);
        };

        if let Some(key) = entity.unique_key() {
            let taken = rows
                .iter()
                .any(|row| row.id() != Some(id) && row.unique_key() == Some(key));
            if taken {
                return Err(duplicate_key(T::COLLECTION, key));
            }
        }

        entity.set_create_at(rows[index].create_at());
        entity.set_update_at(Some(Utc::now()));
        rows[index] = entity.clone();

        Ok(Some(entity))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut rows = self.store.write()?;
        let before = rows.len();
        rows.retain(|row| row.id() != Some(id));
        Ok(rows.len() < before)
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<T>> {
        self.find_first(|row| row.id() == Some(id))
    }

    async fn exists(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.store.read()?.iter().any(|row| row.id() == Some(id)))
    }

    async fn list(&self, predicate: Option<Predicate<T>>) -> AppResult<EntityStream<T>> {
        let snapshot = self.store.read()?.clone();

        let rows = snapshot
            .into_iter()
            .filter(move |entity| matches(&predicate, entity))
            .map(Ok);

        Ok(stream::iter(rows).boxed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use futures_util::TryStreamExt;
    use crate::domain::entities::UserEntity;

    fn repo() -> InMemoryRepository<UserEntity> {
        InMemoryRepository::new(MemoryStore::new())
    }

    #[actix_web::test]
    async fn test_add_then_get_by_id() {
        let repo = repo();

        let saved = repo.add(UserEntity::new("Ana", "ana@x.com")).await.unwrap();
        let id = saved.id.unwrap();

        let found = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.name, "Ana");
        assert!(found.create_at.is_some());
        assert!(found.update_at.is_none());
    }

    #[actix_web::test]
    async fn test_add_keeps_caller_assigned_id() {
        let repo = repo();
        let id = Uuid::new_v4();

        let mut entity = UserEntity::new("Ana", "ana@x.com");
        entity.set_id(id);

        let saved = repo.add(entity).await.unwrap();
        assert_eq!(saved.id, Some(id));
        assert!(repo.exists(id).await.unwrap());
    }

    #[actix_web::test]
    async fn test_duplicate_login_is_constraint_violation() {
        let repo = repo();
        repo.add(UserEntity::new("Ana", "ana@x.com")).await.unwrap();

        let result = repo.add(UserEntity::new("Other Ana", "ana@x.com")).await;
        assert!(matches!(
            result,
            Err(AppError::StorageFault { kind: StorageFaultKind::ConstraintViolation, .. })
        ));
    }

    #[actix_web::test]
    async fn test_update_of_missing_entity_is_none() {
        let repo = repo();

        let mut ghost = UserEntity::new("Ghost", "ghost@x.com");
        ghost.set_id(Uuid::new_v4());

        assert!(repo.update(ghost).await.unwrap().is_none());
        assert!(repo.update(UserEntity::new("NoId", "noid@x.com")).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_update_preserves_create_at_and_stamps_update_at() {
        let repo = repo();
        let saved = repo.add(UserEntity::new("Ana", "ana@x.com")).await.unwrap();

        let mut changed = saved.clone();
        changed.name = "Ana Maria".to_string();
        changed.create_at = None;

        let updated = repo.update(changed).await.unwrap().unwrap();
        assert_eq!(updated.create_at, saved.create_at);
        assert!(updated.update_at.is_some());
        assert_eq!(repo.get_by_id(saved.id.unwrap()).await.unwrap().unwrap().name, "Ana Maria");
    }

    #[actix_web::test]
    async fn test_delete_reports_whether_anything_was_removed() {
        let repo = repo();
        let saved = repo.add(UserEntity::new("Ana", "ana@x.com")).await.unwrap();
        let id = saved.id.unwrap();

        assert!(repo.delete(id).await.unwrap());
        assert!(!repo.delete(id).await.unwrap());
        assert!(!repo.exists(id).await.unwrap());
    }

    #[actix_web::test]
    async fn test_list_filters_and_can_be_called_again() {
        let repo = repo();
        repo.add(UserEntity::new("Ana", "ana@x.com")).await.unwrap();
        repo.add(UserEntity::new("Bia", "bia@x.com")).await.unwrap();

        let only_bia: Predicate<UserEntity> = Arc::new(|u: &UserEntity| u.name == "Bia");
        let filtered: Vec<UserEntity> = repo.list(Some(only_bia)).await.unwrap().try_collect().await.unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].email, "bia@x.com");

        let all: Vec<UserEntity> = repo.list(None).await.unwrap().try_collect().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Ana");
    }

    #[actix_web::test]
    async fn test_scopes_share_one_store() {
        let store = MemoryStore::new();
        let first = InMemoryRepository::<UserEntity>::new(store.clone());
        let second = InMemoryRepository::<UserEntity>::new(store);

        let saved = first.add(UserEntity::new("Ana", "ana@x.com")).await.unwrap();
        assert!(second.exists(saved.id.unwrap()).await.unwrap());
    }
}
