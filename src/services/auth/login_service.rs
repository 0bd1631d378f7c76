//! 로그인 서비스
//!
//! 이메일로 사용자를 찾고, 찾으면 인증 게이트로 토큰을 발급합니다.
//! 비밀번호는 확인하지 않습니다. 이메일이 저장소에 있으면 로그인에 성공합니다.

use std::sync::Arc;
use log::info;
use crate::domain::dto::{LoginDto, LoginResponse, validate_dto};
use crate::errors::{AppError, AppResult};
use crate::repositories::UserRepository;
use crate::services::auth::authentication_gate::AuthenticationGate;

/// 일치하는 로그인이 없을 때의 메시지
pub const LOGIN_FAILED: &str = "Failed to authenticate";

/// 작업 단위 하나에 묶인 로그인 서비스
pub struct LoginService {
    users: Box<dyn UserRepository>,
    gate: Arc<AuthenticationGate>,
}

impl LoginService {
    pub fn new(users: Box<dyn UserRepository>, gate: Arc<AuthenticationGate>) -> Self {
        Self { users, gate }
    }

    /// 로그인 요청을 처리합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(LoginResponse)` - 토큰 발급 성공
    /// * `Err(AppError::ValidationError)` - 이메일 형식 오류
    /// * `Err(AppError::AuthenticationError)` - 일치하는 사용자 없음
    /// * `Err(AppError::StorageFault)` - 저장소 장애
    pub async fn login(&self, request: &LoginDto) -> AppResult<LoginResponse> {
        validate_dto(request)?;

        let Some(user) = self.users.find_by_login(&request.email).await? else {
            info!("로그인 실패: 일치하는 사용자가 없습니다");
            return Err(AppError::AuthenticationError(LOGIN_FAILED.to_string()));
        };

        let subject = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("저장된 사용자에 ID가 없습니다".to_string()))?;

        let issued = self.gate.issue(&subject, &user.email)?;
        info!("로그인 성공: sub={}", subject);

        Ok(LoginResponse::from_token(&issued, user.email))
    }
}
