//! 로그인 요청 DTO
//!
//! 이메일 하나만 받습니다. 비밀번호 검증은 수행하지 않습니다.
use serde::Deserialize;
use validator::Validate;

/// 로그인 요청 구조체
///
/// ```json
/// { "email": "a@b.com" }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LoginDto {
    #[serde(default)]
    #[validate(
        length(min = 1, max = 100, message = "이메일은 필수이며 100자를 넘을 수 없습니다"),
        email(message = "유효한 이메일 주소를 입력해주세요")
    )]
    pub email: String,
}

impl LoginDto {
    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into() }
    }
}
