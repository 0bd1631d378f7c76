//! # Object Mapping
//!
//! 엔티티, 모델, DTO 사이의 변환 규칙을 `(원본 타입, 대상 타입)` 쌍으로 조회합니다.
//!
//! ```text
//! MapperRegistryBuilder ──register()──▶ (A, B) + (B, A) 규칙
//!          │
//!          └──build()──▶ MapperRegistry (불변, Arc로 공유)
//!                              │
//!                              └──convert::<S, D>(&s)
//! ```
//!
//! - 규칙은 시작 시 한 번만 등록되고 이후 변경되지 않습니다.
//! - 중복 등록이나 자기 자신으로의 등록은 `ConfigurationFault`로 시작을 중단시킵니다.
//! - 변환 함수는 [`profiles`]에 순수 함수로 정의되어 있어 개별적으로 테스트할 수 있습니다.

pub mod profiles;
pub mod registry;

pub use profiles::build_registry;
pub use registry::{MapperRegistry, MapperRegistryBuilder};
