//! User Entity Implementation
//!
//! `users` 컬렉션에 저장되는 사용자 문서입니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::domain::entities::{Entity, uuid_as_string};

/// 영속 사용자 엔티티
///
/// 리포지토리 계층에서만 다루며, HTTP 경계를 넘지 않습니다.
/// `email`은 로그인 식별자이며 저장소의 유니크 인덱스로 중복이 막혀 있다고 가정합니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserEntity {
    #[serde(
        rename = "_id",
        with = "uuid_as_string",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<Uuid>,

    pub name: String,

    pub email: String,

    #[serde(default)]
    pub create_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub update_at: Option<DateTime<Utc>>,
}

impl UserEntity {
    /// 아직 식별자가 없는 새 엔티티를 만듭니다.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            create_at: None,
            update_at: None,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.map(|id| id.to_string())
    }
}

impl Entity for UserEntity {
    const COLLECTION: &'static str = "users";

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }

    fn create_at(&self) -> Option<DateTime<Utc>> {
        self.create_at
    }

    fn set_create_at(&mut self, at: Option<DateTime<Utc>>) {
        self.create_at = at;
    }

    fn set_update_at(&mut self, at: Option<DateTime<Utc>>) {
        self.update_at = at;
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_is_stored_as_string_under_underscore_id() {
        let id = Uuid::new_v4();
        let mut user = UserEntity::new("Ana", "ana@x.com");
        user.set_id(id);

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["_id"], serde_json::json!(id.to_string()));

        let back: UserEntity = serde_json::from_value(json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn test_new_entity_has_no_identity() {
        let user = UserEntity::new("Ana", "ana@x.com");
        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("_id").is_none());
        assert!(user.id_string().is_none());
    }
}
