//! 사용자 비즈니스 모델
//!
//! 서비스 계층이 기준으로 삼는 사용자 표현입니다. 엔티티와 필드 구성이 같지만
//! 식별자를 항상 값으로 들고 다니며, 아직 저장되지 않은 모델은 nil UUID를 가집니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserModel {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub create_at: Option<DateTime<Utc>>,
    pub update_at: Option<DateTime<Utc>>,
}

impl UserModel {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::nil(),
            name: name.into(),
            email: email.into(),
            create_at: None,
            update_at: None,
        }
    }

    /// 저장소가 식별자를 할당한 적이 있는지 여부
    pub fn is_persisted(&self) -> bool {
        !self.id.is_nil()
    }
}
