//! # 사용자 리포지토리 구현
//!
//! ## 로그인 조회 규칙
//!
//! - **대소문자 구분**: MongoDB 기본(이진) collation과 메모리 저장소의 바이트 비교 모두
//!   `"Ana@x.com"`과 `"ana@x.com"`을 다른 로그인으로 봅니다.
//! - **유일성**: 저장소가 보장한다고 가정합니다(`email_unique` 인덱스). 리포지토리는 검사하지 않습니다.
//! - **비밀번호**: 확인하지 않습니다. 로그인은 이메일 존재 여부만 봅니다.

use async_trait::async_trait;
use log::info;
use mongodb::IndexModel;
use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use crate::domain::entities::UserEntity;
use crate::errors::AppResult;
use crate::repositories::memory_repository::InMemoryRepository;
use crate::repositories::mongo_repository::MongoRepository;
use crate::repositories::repository::Repository;

/// 사용자 데이터 액세스 계약
#[async_trait]
pub trait UserRepository: Repository<UserEntity> {
    /// 로그인(이메일)으로 사용자를 찾습니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(UserEntity))` - 일치하는 사용자 하나
    /// * `Ok(None)` - 일치하는 사용자가 없음 (정상 결과)
    /// * `Err(AppError::StorageFault)` - 저장소 장애
    async fn find_by_login(&self, email: &str) -> AppResult<Option<UserEntity>>;
}

#[async_trait]
impl UserRepository for MongoRepository<UserEntity> {
    async fn find_by_login(&self, email: &str) -> AppResult<Option<UserEntity>> {
        Ok(self.collection().find_one(doc! { "email": email }).await?)
    }
}

impl MongoRepository<UserEntity> {
    /// `users` 컬렉션 인덱스 생성
    ///
    /// 로그인 유일성을 보장하는 `email` 유니크 인덱스를 만듭니다.
    /// 이미 중복 데이터가 있으면 실패합니다. 애플리케이션 시작 시 한 번 호출합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        self.collection().create_index(email_index).await?;
        info!("users 컬렉션 인덱스 준비 완료");

        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository<UserEntity> {
    async fn find_by_login(&self, email: &str) -> AppResult<Option<UserEntity>> {
        self.find_first(|user| user.email == email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory_repository::MemoryStore;

    fn repo() -> Box<dyn UserRepository> {
        Box::new(InMemoryRepository::new(MemoryStore::new()))
    }

    #[actix_web::test]
    async fn test_find_by_login_on_empty_store_is_none() {
        let repo = repo();
        assert!(repo.find_by_login("a@b.com").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_find_by_login_returns_the_matching_user() {
        let repo = repo();
        repo.add(UserEntity::new("Ana", "ana@x.com")).await.unwrap();
        let bia = repo.add(UserEntity::new("Bia", "bia@x.com")).await.unwrap();

        let found = repo.find_by_login("bia@x.com").await.unwrap().unwrap();
        assert_eq!(found.id, bia.id);
    }

    #[actix_web::test]
    async fn test_find_by_login_is_case_sensitive() {
        let repo = repo();
        repo.add(UserEntity::new("Ana", "ana@x.com")).await.unwrap();

        assert!(repo.find_by_login("ANA@x.com").await.unwrap().is_none());
    }
}
