//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! Client
//!   │ HTTP Request/Response
//!   ▼
//! Handlers (이 모듈)      ← Web Layer. DTO만 주고받음
//!   │
//! Services               ← 검증, 매핑, 비즈니스 규칙
//!   │
//! Repositories           ← 엔티티 영속화
//! ```
//!
//! 핸들러는 `web::Data<AppContext>`에서 요청마다 새 서비스를 꺼내 쓰고,
//! 에러는 `AppError`로 돌려 `ResponseError`가 상태 코드와 본문을 만들게 합니다.
//!
//! - [`auth`] - `POST /api/v1/login`
//! - [`users`] - `/api/v1/users` CRUD (Bearer 정책)

pub mod auth;
pub mod users;
