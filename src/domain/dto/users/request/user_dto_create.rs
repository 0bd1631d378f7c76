//! # 사용자 생성 요청 DTO
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 |
//! |------|------|
//! | `name` | 필수, 60자 이하 |
//! | `email` | 필수, 이메일 형식, 100자 이하 |
//!
//! 필드가 아예 빠진 요청도 JSON 파싱 단계가 아니라 검증 단계에서
//! 필드 단위 에러로 보고되도록 `#[serde(default)]`를 둡니다.
//!
//! ```json
//! { "name": "Ana", "email": "ana@x.com" }
//! ```

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserDtoCreate {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::validate_dto;
    use crate::errors::AppError;

    fn create(name: &str, email: &str) -> UserDtoCreate {
        UserDtoCreate {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(validate_dto(&create("Ana", "ana@x.com")).is_ok());
    }

    #[test]
    fn test_name_over_60_chars_is_rejected() {
        let Err(AppError::ValidationError(fields)) = validate_dto(&create(&"n".repeat(61), "ana@x.com")) else {
            panic!("Expected ValidationError");
        };

        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].field, "name");
        assert_eq!(fields[0].code, "length");
    }

    #[test]
    fn test_missing_fields_report_both() {
        let dto: UserDtoCreate = serde_json::from_str("{}").unwrap();
        let Err(AppError::ValidationError(fields)) = validate_dto(&dto) else {
            panic!("Expected ValidationError");
        };

        assert!(fields.iter().any(|f| f.field == "name"));
        assert!(fields.iter().any(|f| f.field == "email"));
    }
}
