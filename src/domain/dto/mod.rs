//! # Data Transfer Objects
//!
//! HTTP 경계를 넘나드는 유일한 표현입니다. 엔티티는 이 경계를 넘지 않습니다.
//!
//! ```text
//! dto
//! ├── auth    - 로그인 요청/응답
//! └── users
//!     ├── request   - UserDtoCreate, UserDtoUpdate
//!     └── response  - UserDto, UserDtoCreateResult, UserDtoUpdateResult
//! ```
//!
//! ## 검증
//!
//! 검증 규칙은 `validator` derive 속성으로 선언하지만, 실행은 항상 명시적입니다.
//! 모델로 변환하기 전에 [`validate_dto`]를 호출해 필드 단위 에러 목록을 받습니다.

pub mod auth;
pub mod users;

pub use auth::*;
pub use users::*;

use validator::Validate;
use crate::errors::AppResult;

/// DTO의 검증 규칙을 실행하고 실패를 [`crate::errors::AppError::ValidationError`]로 돌려줍니다.
pub fn validate_dto<T: Validate>(dto: &T) -> AppResult<()> {
    dto.validate()?;
    Ok(())
}
