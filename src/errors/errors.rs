//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 에러 분류
//!
//! | 변형 | HTTP | 호출자 처리 |
//! |------|------|-------------|
//! | `ValidationError` | 400 | 필드 단위 에러 목록을 그대로 노출 |
//! | `AuthenticationError` | 401 | 분기 가능한 정상 결과 (재시도 없음) |
//! | `NotFound` | 404 | 분기 가능한 정상 결과 (장애로 로깅하지 않음) |
//! | `StorageFault` | 500 / 409 | 로컬 복구 없이 프로세스 경계까지 전파 |
//! | `ConfigurationFault` | 500 | 시작 단계에서 치명적 |
//! | `InternalError` | 500 | 토큰 인코딩 실패, 미등록 매핑 등 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::AppError;
//!
//! async fn get_user(repo: &dyn UserRepository, id: Uuid) -> Result<UserEntity, AppError> {
//!     repo.get_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
//! }
//! ```

use std::fmt;
use serde::Serialize;
use thiserror::Error;

/// 필드 단위 검증 에러
///
/// `validator`가 만들어내는 에러 맵을 호출자에게 노출하기 위한 평탄화된 형태입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

/// 저장소 장애의 종류
///
/// 연결 장애와 제약 조건 위반은 서로 다른 실패로 취급되며,
/// 어느 쪽도 `NotFound`로 가려지지 않습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageFaultKind {
    /// 서버 선택 실패, I/O 에러, 커넥션 풀 초기화 등
    Connectivity,
    /// 유니크 인덱스 위반 등
    ConstraintViolation,
    /// 문서 ↔ 엔티티 직렬화 실패
    Serialization,
    Other,
}

impl fmt::Display for StorageFaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StorageFaultKind::Connectivity => "connectivity",
            StorageFaultKind::ConstraintViolation => "constraint_violation",
            StorageFaultKind::Serialization => "serialization",
            StorageFaultKind::Other => "other",
        };
        f.write_str(label)
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {}", join_field_errors(.0))]
    ValidationError(Vec<FieldError>),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 저장소 장애 (500, 제약 조건 위반은 409)
    #[error("Storage fault ({kind}): {message}")]
    StorageFault {
        kind: StorageFaultKind,
        message: String,
    },

    /// 시작 설정 누락/오류. 프로세스 시작을 중단시킵니다.
    #[error("Configuration fault: {0}")]
    ConfigurationFault(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn storage(kind: StorageFaultKind, message: impl Into<String>) -> Self {
        AppError::StorageFault {
            kind,
            message: message.into(),
        }
    }

    pub fn field(field: &str, code: &str, message: &str) -> Self {
        AppError::ValidationError(vec![FieldError::new(field, code, message)])
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    FieldError::new(field.clone(), e.code.to_string(), message)
                })
            })
            .collect();

        // HashMap 순회 순서에 의존하지 않도록 정렬
        fields.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
        AppError::ValidationError(fields)
    }
}

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY: i32 = 11000;

/// 드라이버 에러의 출처 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DriverFailure {
    /// 쓰기 명령의 개별 문서 에러
    Write,
    /// 서버가 돌려준 명령 에러
    Command,
    /// I/O, 서버 선택, 커넥션 풀 초기화
    Network,
    /// BSON 직렬화/역직렬화
    Bson,
    Other,
}

/// 서버 에러 코드와 출처로 저장소 장애 종류를 정합니다.
fn storage_fault_kind(code: Option<i32>, failure: DriverFailure) -> StorageFaultKind {
    match (failure, code) {
        (DriverFailure::Write | DriverFailure::Command, Some(DUPLICATE_KEY)) => {
            StorageFaultKind::ConstraintViolation
        }
        (DriverFailure::Network, _) => StorageFaultKind::Connectivity,
        (DriverFailure::Bson, _) => StorageFaultKind::Serialization,
        _ => StorageFaultKind::Other,
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(error: mongodb::error::Error) -> Self {
        use mongodb::error::{ErrorKind, WriteFailure};

        let (failure, code) = match error.kind.as_ref() {
            ErrorKind::Write(WriteFailure::WriteError(e)) => (DriverFailure::Write, Some(e.code)),
            ErrorKind::Command(e) => (DriverFailure::Command, Some(e.code)),
            ErrorKind::Io(_)
            | ErrorKind::ServerSelection { .. }
            | ErrorKind::ConnectionPoolCleared { .. } => (DriverFailure::Network, None),
            ErrorKind::BsonSerialization(_) | ErrorKind::BsonDeserialization(_) => {
                (DriverFailure::Bson, None)
            }
            _ => (DriverFailure::Other, None),
        };

        AppError::storage(storage_fault_kind(code, failure), error.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::StorageFault {
                kind: StorageFaultKind::ConstraintViolation,
                ..
            } => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 검증 에러는 필드 목록을 `details`로 함께 내려줍니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let body = match self {
            AppError::ValidationError(fields) => serde_json::json!({
                "error": self.to_string(),
                "details": fields,
            }),
            _ => serde_json::json!({
                "error": self.to_string()
            }),
        };

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
