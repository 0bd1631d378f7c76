//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 엔티티 타입으로 매개변수화된 하나의 CRUD 계약([`Repository`])과,
//! 로그인 조회를 더한 [`UserRepository`]를 제공합니다.
//!
//! ```text
//! Repository<T: Entity>        add / update / delete / get_by_id / exists / list
//!        ▲
//! UserRepository               + find_by_login
//!        ▲
//! ├── MongoRepository<UserEntity>      (MongoDB, 운영)
//! └── InMemoryRepository<UserEntity>   (메모리, 테스트/로컬)
//! ```
//!
//! # 작업 단위
//!
//! 리포지토리는 스스로 트랜잭션을 시작하지 않습니다. 요청마다
//! [`RepositoryProvider::users`]로 새 스코프를 받아 쓰고 요청이 끝나면 버립니다.
//! 정합성은 저장소에 위임합니다.
//!
//! # 결과 규약
//!
//! - 없는 엔티티는 `Ok(None)` / `Ok(false)`로 돌려주는 정상 결과입니다.
//! - 연결 장애와 제약 조건 위반은 `StorageFault`의 서로 다른 종류로 그대로 전파됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! let repo = provider.users();
//! let saved = repo.add(UserEntity::new("Ana", "ana@x.com")).await?;
//! let found = repo.find_by_login("ana@x.com").await?;
//! ```

pub mod memory_repository;
pub mod mongo_repository;
pub mod provider;
pub mod repository;
pub mod users;

pub use memory_repository::{InMemoryRepository, MemoryStore};
pub use mongo_repository::MongoRepository;
pub use provider::RepositoryProvider;
pub use repository::{EntityStream, Predicate, Repository};
pub use users::UserRepository;
