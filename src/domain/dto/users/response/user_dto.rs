//! 사용자 응답 DTO
//!
//! 세 응답 모두 엔티티/모델에 대응 필드가 있는 값만 노출합니다.
//! 생성 결과는 `create_at`, 수정 결과는 `update_at`만 추가로 담습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 조회 응답
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// 생성 응답 (201)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDtoCreateResult {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub create_at: Option<DateTime<Utc>>,
}

/// 수정 응답
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDtoUpdateResult {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub update_at: Option<DateTime<Utc>>,
}
