//! # Domain Layer Module
//!
//! 같은 사용자를 세 가지 표현으로 다룹니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 영속 표현 (UserEntity)      ← 리포지토리만 다룸
//! ├── models    - 비즈니스 표현 (UserModel)   ← 서비스 로직의 기준 표현
//! └── dto       - 전송 표현 (UserDto 계열)    ← HTTP 경계 밖으로 나가는 유일한 형태
//! ```
//!
//! ## 표현 간 규칙
//!
//! - 전송 객체의 모든 필드는 모델과 엔티티에 대응 필드가 있습니다.
//! - 세 표현이 공유하는 필드는 변환 시 손실되지 않습니다.
//! - 한 표현에만 있는 필드(생성/수정 시각 등)는 그 필드가 없는 전송 객체로 새어 나가지 않습니다.
//! - 표현 간 변환은 리포지토리 밖, 경계에서 [`crate::mapping`] 레지스트리를 통해 수행합니다.
//!
//! ## 사용자 등록 플로우
//!
//! ```rust,ignore
//! // 1. DTO로 입력 받기 + 명시적 검증
//! validate_dto(&request)?;
//!
//! // 2. DTO → 모델 → 엔티티
//! let model: UserModel = mapper.convert(&request)?;
//! let entity: UserEntity = mapper.convert(&model)?;
//!
//! // 3. 리포지토리를 통한 영속화
//! let saved = repo.add(entity).await?;
//!
//! // 4. 응답 DTO로 변환
//! let response: UserDtoCreateResult = mapper.convert(&saved)?;
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::{Entity, UserEntity};
pub use dto::{
    LoginDto, LoginRejection, LoginResponse, UserDto, UserDtoCreate, UserDtoCreateResult,
    UserDtoUpdate, UserDtoUpdateResult, validate_dto,
};
pub use models::{AuthenticatedUser, AuthorizationPolicy, IssuedToken, TokenClaims, UserModel};
