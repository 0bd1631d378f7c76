//! 요청 스코프 리포지토리 공급자
//!
//! 프로세스당 하나 만들어 공유하고, 요청마다 새 리포지토리 스코프를 꺼냅니다.

use log::info;
use crate::config::{DatabaseConfig, StorageBackend};
use crate::db::Database;
use crate::domain::entities::UserEntity;
use crate::errors::AppResult;
use crate::repositories::memory_repository::{InMemoryRepository, MemoryStore};
use crate::repositories::mongo_repository::MongoRepository;
use crate::repositories::users::UserRepository;

#[derive(Clone)]
pub enum RepositoryProvider {
    Mongo(Database),
    Memory(MemoryStore<UserEntity>),
}

impl RepositoryProvider {
    /// `STORAGE_BACKEND` 설정에 맞는 공급자를 만듭니다.
    ///
    /// MongoDB라면 연결을 확인하고 인덱스를 준비한 뒤 돌려줍니다.
    pub async fn from_config() -> AppResult<Self> {
        match DatabaseConfig::backend() {
            StorageBackend::Mongo => {
                let database = Database::from_config().await?;
                MongoRepository::<UserEntity>::new(database.get_database())
                    .create_indexes()
                    .await?;
                info!("MongoDB 저장소를 사용합니다: {}", database.database_name());
                Ok(RepositoryProvider::Mongo(database))
            }
            StorageBackend::Memory => {
                info!("메모리 저장소를 사용합니다");
                Ok(Self::in_memory())
            }
        }
    }

    pub fn in_memory() -> Self {
        RepositoryProvider::Memory(MemoryStore::new())
    }

    /// 작업 단위 하나에 쓸 사용자 리포지토리
    pub fn users(&self) -> Box<dyn UserRepository> {
        match self {
            RepositoryProvider::Mongo(database) => Box::new(MongoRepository::new(database.get_database())),
            RepositoryProvider::Memory(store) => Box::new(InMemoryRepository::new(store.clone())),
        }
    }
}
