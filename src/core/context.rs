//! 애플리케이션 구성 루트

use std::sync::Arc;
use actix_web::web;
use log::info;
use crate::config::{SigningConfiguration, TokenConfiguration};
use crate::errors::AppResult;
use crate::mapping::{MapperRegistry, build_registry};
use crate::repositories::RepositoryProvider;
use crate::services::auth::{AuthenticationGate, LoginService};
use crate::services::users::UserService;

/// 프로세스 전체에서 공유되는 읽기 전용 구성요소 묶음
///
/// 복제는 `Arc` 참조만 늘립니다. 요청 상태는 들고 있지 않습니다.
#[derive(Clone)]
pub struct AppContext {
    gate: Arc<AuthenticationGate>,
    mapper: Arc<MapperRegistry>,
    repositories: RepositoryProvider,
}

impl AppContext {
    pub fn new(gate: AuthenticationGate, mapper: MapperRegistry, repositories: RepositoryProvider) -> Self {
        Self {
            gate: Arc::new(gate),
            mapper: Arc::new(mapper),
            repositories,
        }
    }

    /// 환경 설정으로 모든 구성요소를 만듭니다.
    ///
    /// 어느 단계든 실패하면 에러를 돌려주고, 호출자는 서버를 시작하지 않아야 합니다.
    ///
    /// # Errors
    ///
    /// * `ConfigurationFault` - 토큰 설정 누락, 서명 키 오류, 매핑 등록 충돌
    /// * `StorageFault(Connectivity)` - MongoDB 연결 실패
    pub async fn from_env() -> AppResult<Self> {
        // 토큰 설정이 없으면 키 생성 전에 중단
        let token = TokenConfiguration::from_env()?;
        let gate = AuthenticationGate::new(SigningConfiguration::from_env()?, token);
        let token = gate.token_configuration();
        info!(
            "인증 게이트 준비 ({} 정책): issuer={}, audience={}, seconds={}",
            gate.policy().name(),
            token.issuer(),
            token.audience(),
            token.seconds()
        );

        let mapper = build_registry()?;
        info!("매핑 규칙 {}개 등록 완료", mapper.len());

        let repositories = RepositoryProvider::from_config().await?;

        Ok(Self::new(gate, mapper, repositories))
    }

    /// 메모리 저장소를 쓰는 구성. 로컬 실행과 테스트용입니다.
    pub fn in_memory(signing: SigningConfiguration, token: TokenConfiguration) -> AppResult<Self> {
        Ok(Self::new(
            AuthenticationGate::new(signing, token),
            build_registry()?,
            RepositoryProvider::in_memory(),
        ))
    }

    pub fn gate(&self) -> Arc<AuthenticationGate> {
        Arc::clone(&self.gate)
    }

    pub fn mapper(&self) -> Arc<MapperRegistry> {
        Arc::clone(&self.mapper)
    }

    /// 새 작업 단위의 로그인 서비스
    pub fn login_service(&self) -> LoginService {
        LoginService::new(self.repositories.users(), self.gate())
    }

    /// 새 작업 단위의 사용자 서비스
    pub fn user_service(&self) -> UserService {
        UserService::new(self.repositories.users(), self.mapper())
    }

    /// 핸들러와 인증 미들웨어가 쓰는 앱 데이터를 등록합니다.
    ///
    /// ```rust,ignore
    /// App::new()
    ///     .configure(|cfg| context.configure(cfg))
    ///     .configure(configure_all_routes)
    /// ```
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.clone()))
            .app_data(web::Data::from(self.gate()));
    }
}
