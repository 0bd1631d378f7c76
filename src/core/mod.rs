//! # Core Module
//!
//! 애플리케이션 구성 루트를 제공합니다.
//!
//! 시작 시 [`AppContext`]가 설정, 서명 키, 매퍼 레지스트리, 리포지토리 공급자를
//! 한 번에 만들고 이후에는 읽기 전용으로 공유합니다. 전역 컨테이너나
//! 지연 초기화 싱글톤은 없습니다. 필요한 구성요소는 모두 생성자 인자로 전달됩니다.
//!
//! ```text
//! main
//!  └── AppContext::from_env()
//!        ├── TokenConfiguration      (Arc 공유)
//!        ├── SigningConfiguration ─▶ AuthenticationGate (Arc 공유)
//!        ├── MapperRegistry          (Arc 공유)
//!        └── RepositoryProvider ──▶ 요청마다 Box<dyn UserRepository>
//!
//! 요청
//!  └── context.user_service() / context.login_service()
//! ```

pub mod context;

pub use context::AppContext;
