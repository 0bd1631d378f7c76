//! Users Entity Module
//!
//! 사용자 도메인의 영속 엔티티를 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::UserEntity;
//!
//! let user = UserEntity::new("Ana", "ana@x.com");
//! let saved = repo.add(user).await?;
//! assert!(saved.id.is_some());
//! ```

pub mod user;

pub use user::UserEntity;
