//! 사용자 수정 요청 DTO
//!
//! 생성 요청과 같은 규칙에 더해, 대상 `id`가 반드시 있어야 합니다.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserDtoUpdate {
    #[serde(default)]
    #[validate(custom(function = "validate_identity"))]
    pub id: Uuid,

    #[serde(default)]
    #[validate(length(min = 1, max = 60, message = "이름은 필수이며 60자를 넘을 수 없습니다"))]
    pub name: String,

    #[serde(default)]
    #[validate(
        length(min = 1, max = 100, message = "이메일은 필수이며 100자를 넘을 수 없습니다"),
        email(message = "유효한 이메일 주소를 입력해주세요")
    )]
    pub email: String,
}

fn validate_identity(id: &Uuid) -> Result<(), ValidationError> {
    if id.is_nil() {
        return Err(ValidationError::new("required")
            .with_message("수정할 사용자 ID가 필요합니다".into()));
    }
    Ok(())
}
