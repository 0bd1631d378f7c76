//! # Domain Entities Module
//!
//! 영속 저장소와 1:1로 대응되는 엔티티와, 제네릭 리포지토리가 요구하는
//! 공통 계약([`Entity`])을 정의합니다.
//!
//! ## 공통 필드
//!
//! 모든 엔티티는 다음 필드를 가집니다.
//!
//! | 필드 | 저장 형태 | 설명 |
//! |------|-----------|------|
//! | `id` | `_id` (UUID 문자열) | 삽입 시 비어 있으면 리포지토리가 v4 UUID를 할당 |
//! | `create_at` | RFC 3339 문자열 | 삽입 시 리포지토리가 기록, 이후 변경되지 않음 |
//! | `update_at` | RFC 3339 문자열 | 수정 시 리포지토리가 기록 |

pub mod users;

pub use users::*;

use chrono::{DateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

/// 제네릭 리포지토리가 다룰 수 있는 엔티티 계약
///
/// 식별자와 감사 시각만 노출합니다. 나머지 필드는 리포지토리가 알 필요가 없습니다.
pub trait Entity: Clone + Send + Sync + Serialize + DeserializeOwned + Unpin + 'static {
    /// 저장소 컬렉션(테이블) 이름
    const COLLECTION: &'static str;

    fn id(&self) -> Option<Uuid>;

    fn set_id(&mut self, id: Uuid);

    fn create_at(&self) -> Option<DateTime<Utc>>;

    fn set_create_at(&mut self, at: Option<DateTime<Utc>>);

    fn set_update_at(&mut self, at: Option<DateTime<Utc>>);

    /// 저장소가 유일성을 보장하는 자연 키 (MongoDB에서는 유니크 인덱스)
    fn unique_key(&self) -> Option<&str> {
        None
    }
}

/// `Option<Uuid>`를 항상 하이픈 포함 문자열로 직렬화합니다.
///
/// BSON 직렬화기의 human-readable 설정과 무관하게 저장 형태와
/// 조회 필터(`doc! { "_id": id.to_string() }`)가 일치하도록 고정합니다.
pub mod uuid_as_string {
    use serde::{Deserialize, Deserializer, Serializer};
    use uuid::Uuid;

    pub fn serialize<S>(id: &Option<Uuid>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match id {
            Some(id) => serializer.serialize_str(&id.hyphenated().to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Uuid>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| Uuid::parse_str(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}
