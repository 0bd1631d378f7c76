//! MongoDB 기반 제네릭 리포지토리
//!
//! 문서의 `_id`에는 UUID 문자열이 들어갑니다. 조회 필터도 항상 같은 문자열 형태를 씁니다.

use std::marker::PhantomData;
use async_trait::async_trait;
use chrono::Utc;
use futures_util::{StreamExt, TryStreamExt, future};
use log::debug;
use mongodb::bson::{Document, doc};
use mongodb::{Collection, Database};
use uuid::Uuid;
use crate::domain::entities::Entity;
use crate::errors::{AppError, AppResult};
use crate::repositories::repository::{EntityStream, Predicate, Repository, matches};

/// 작업 단위 하나에 묶인 MongoDB 리포지토리
///
/// `mongodb::Database` 핸들은 내부 커넥션 풀을 공유하므로 스코프마다 복제해도 됩니다.
pub struct MongoRepository<T: Entity> {
    database: Database,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> MongoRepository<T> {
    pub fn new(database: Database) -> Self {
        Self {
            database,
            _entity: PhantomData,
        }
    }

    pub(crate) fn collection(&self) -> Collection<T> {
        self.database.collection::<T>(T::COLLECTION)
    }

    fn id_filter(id: Uuid) -> Document {
        doc! { "_id": id.to_string() }
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for MongoRepository<T> {
    async fn add(&self, mut entity: T) -> AppResult<T> {
        if entity.id().is_none() {
            entity.set_id(Uuid::new_v4());
        }
        entity.set_create_at(Some(Utc::now()));

        self.collection().insert_one(&entity).await?;
        debug!("{} 문서 추가: {:?}", T::COLLECTION, entity.id());

        Ok(entity)
    }

    async fn update(&self, mut entity: T) -> AppResult<Option<T>> {
        let Some(id) = entity.id() else {
            return Ok(None);
        };

        let collection = self.collection();
        let Some(existing) = collection.find_one(Self::id_filter(id)).await? else {
            return Ok(None);
        };

        entity.set_create_at(existing.create_at());
        entity.set_update_at(Some(Utc::now()));

        let result = collection.replace_one(Self::id_filter(id), &entity).await?;
        if result.matched_count == 0 {
            // 조회와 교체 사이에 삭제된 경우
            return Ok(None);
        }

        Ok(Some(entity))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = self.collection().delete_one(Self::id_filter(id)).await?;
        Ok(result.deleted_count > 0)
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<T>> {
        Ok(self.collection().find_one(Self::id_filter(id)).await?)
    }

    async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let count = self.collection().count_documents(Self::id_filter(id)).await?;
        Ok(count > 0)
    }

    async fn list(&self, predicate: Option<Predicate<T>>) -> AppResult<EntityStream<T>> {
        let cursor = self.collection().find(doc! {}).await?;

        let stream = cursor
            .map_err(AppError::from)
            .try_filter(move |entity| future::ready(matches(&predicate, entity)))
            .boxed();

        Ok(stream)
    }
}
