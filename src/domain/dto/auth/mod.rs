pub mod login_dto;
pub mod login_response;

pub use login_dto::LoginDto;
pub use login_response::{LoginResponse, LoginRejection};
