//! 사용자 리포지토리
//!
//! [`UserRepository`](user_repo::UserRepository)는 제네릭 CRUD에 로그인 조회를 더합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! let repo = provider.users();
//! let user = repo.find_by_login("user@example.com").await?;
//! ```

pub mod user_repo;

pub use user_repo::UserRepository;
