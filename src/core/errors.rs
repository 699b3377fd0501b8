//! # Application Error Handling System
//!
//! 회원가입 파이프라인 전체에서 사용하는 통합 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
//! 핸들러가 반환한 에러가 곧바로 JSON HTTP 응답으로 변환됩니다.
//!
//! ## 에러 분류
//!
//! ### 1. 클라이언트 에러 (요청 거부, 상태 변경 없음)
//! - `ValidationError`: 필수 필드 누락, 나이 제한, 이메일/닉네임 중복
//! - `PayloadTooLarge`: 요청 본문 크기 초과
//! - `RouteNotFound`: 등록되지 않은 경로/메서드
//!
//! ### 2. 서버 에러 (상세 내용은 로그에만 기록)
//! - `StorageError`: 저장소 쓰기 실패
//! - `InternalError`: JSON 파싱 실패, 본문 스트림 오류, 예상치 못한 panic
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 응답 본문 |
//! |----------|-------------|-----------|
//! | `ValidationError` | 400 Bad Request | `{"error": "<message>"}` |
//! | `RouteNotFound` | 404 Not Found | `{"error": {"message": "route not found", "url": "<url>"}}` |
//! | `PayloadTooLarge` | 413 Payload Too Large | `{"error": "request body too large"}` |
//! | `StorageError` | 500 Internal Server Error | `{"error": "failed to create user"}` |
//! | `InternalError` | 500 Internal Server Error | `{"error": "failed to create user"}` |
//!
//! 5xx 에러의 원본 메시지는 `log::error!`로만 남기고 클라이언트에는 일반화된
//! 메시지만 노출합니다.

use actix_web::http::StatusCode;
use actix_web::ResponseError;
use thiserror::Error;

/// 서버 에러 시 클라이언트에게 노출되는 일반 메시지
pub const GENERIC_FAILURE_MESSAGE: &str = "failed to create user";

/// 404 응답에 포함되는 메시지
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "route not found";

/// 애플리케이션 전역 에러 타입
///
/// 검증 실패처럼 예상 가능한 결과는 서비스 계층이 `Err(ValidationError)`로
/// 직접 반환하고, 그 외의 실패는 핸들러의 최상위 경계에서 `InternalError`로
/// 모입니다.
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// // 파일 저장 실패
/// std::fs::write(&path, bytes)
///     .map_err(|e| AppError::StorageError(format!("{}: {}", path.display(), e)))?;
///
/// // JSON 파싱 실패
/// serde_json::from_slice::<serde_json::Value>(&body)
///     .map_err(|e| AppError::InternalError(format!("malformed request body: {}", e)))?;
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러
    ///
    /// 클라이언트가 보낸 데이터가 회원가입 규칙을 만족하지 않을 때 발생합니다.
    /// 400 Bad Request로 응답하며 메시지는 그대로 노출됩니다.
    ///
    /// # 발생 시나리오
    /// - 필수 필드 누락 (`all fields are required`)
    /// - 해석할 수 없는 생년월일
    /// - 16세 미만 (`age must be over 16`)
    /// - 이메일 / 닉네임 중복
    #[error("{0}")]
    ValidationError(String),

    /// 등록되지 않은 경로 에러
    ///
    /// 요청된 URL(경로 + 쿼리)을 담고 있으며 404 응답 본문에 그대로 포함됩니다.
    #[error("route not found: {0}")]
    RouteNotFound(String),

    /// 요청 본문 크기 초과 에러 (413 Payload Too Large)
    #[error("request body exceeds {0} bytes")]
    PayloadTooLarge(usize),

    /// 저장소 에러
    ///
    /// 사용자 컬렉션을 기록하는 도중 발생한 I/O 또는 직렬화 오류입니다.
    /// 500 Internal Server Error로 응답됩니다.
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 내부 서버 에러
    ///
    /// 잘못된 JSON, 본문 스트림 오류, 파이프라인 내부 panic 등
    /// 예상하지 못한 모든 실패를 포괄합니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트 측 원인인지 여부
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::StorageError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 응답은 `Content-Type: application/json`이며,
    /// 5xx 에러는 원본 메시지를 로그로만 남깁니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let body = match self {
            AppError::ValidationError(message) => serde_json::json!({ "error": message }),
            AppError::RouteNotFound(url) => serde_json::json!({
                "error": {
                    "message": ROUTE_NOT_FOUND_MESSAGE,
                    "url": url
                }
            }),
            AppError::PayloadTooLarge(_) => serde_json::json!({ "error": "request body too large" }),
            AppError::StorageError(_) | AppError::InternalError(_) => {
                log::error!("Failed to process registration request: {}", self);
                serde_json::json!({ "error": GENERIC_FAILURE_MESSAGE })
            }
        };

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let bytes = serde_json::to_vec_pretty(&users).context("failed to serialize users")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 `InternalError`로 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
