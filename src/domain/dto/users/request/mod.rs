//! 사용자 요청 DTO
pub mod user_dto_create;
pub mod user_dto_update;

pub use user_dto_create::UserDtoCreate;
pub use user_dto_update::UserDtoUpdate;
