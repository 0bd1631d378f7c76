//! 사용자 응답 DTO
pub mod user_dto;

pub use user_dto::{UserDto, UserDtoCreateResult, UserDtoUpdateResult};
