//! # User Registration HTTP Handlers
//!
//! 회원가입 엔드포인트와 라우트 미스 응답을 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/users` | 새 사용자 등록 | 201 / 400 / 413 / 500 |
//! | 그 외 | 그 외 | 라우트 없음 | 404 |
//!
//! ## 본문 처리
//!
//! `web::Json` 추출기 대신 `web::Payload`를 직접 읽습니다. 본문 해석 실패는
//! 400이 아니라 일반 실패(500)로 응답해야 하고, 잘못된 필드 타입도 "누락"으로
//! 다뤄야 하기 때문입니다.
//!
//! ```bash
//! curl -X POST http://localhost:8080/users \
//!   -H "Content-Type: application/json" \
//!   -d '{"name":"Ana","email":"a@x.com","password":"p","birthDate":"2000-01-01","nick":"ana1"}'
//! ```

use std::any::Any;
use std::panic::AssertUnwindSafe;

use actix_web::{web, HttpRequest, HttpResponse};
use futures_util::{FutureExt, StreamExt};
use log::error;

use crate::{
    config::ServerConfig,
    core::errors::{AppError, AppResult},
    domain::dto::users::request::RegisterUserRequest,
    services::users::UserService,
};

/// 요청 본문 최대 크기 (app_data로 등록)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyLimit(pub usize);

impl Default for BodyLimit {
    fn default() -> Self {
        Self(ServerConfig::DEFAULT_MAX_BODY_BYTES)
    }
}

/// 새 사용자 등록
///
/// 본문 수집부터 저장까지 전체 파이프라인을 하나의 경계 안에서 실행합니다.
/// 파이프라인 내부의 panic도 `InternalError`로 바뀌어 500 응답이 됩니다.
pub async fn create_user(
    req: HttpRequest,
    payload: web::Payload,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let limit = req.app_data::<BodyLimit>().copied().unwrap_or_default();

    let pipeline = async move {
        let body = read_body(payload, limit).await?;
        let request = RegisterUserRequest::from_json_body(&body)?;
        service.register_user(request).await
    };

    let created = AssertUnwindSafe(pipeline)
        .catch_unwind()
        .await
        .unwrap_or_else(|panic| {
            Err(AppError::InternalError(format!(
                "registration pipeline panicked: {}",
                panic_detail(panic.as_ref())
            )))
        })?;

    Ok(HttpResponse::Created().json(created))
}

/// 등록되지 않은 메서드/경로에 대한 404 응답
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::RouteNotFound(req.uri().to_string()))
}

async fn read_body(mut payload: web::Payload, limit: BodyLimit) -> AppResult<web::Bytes> {
    let mut body = web::BytesMut::new();

    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| {
            error!("Failed to read request body: {}", e);
            AppError::InternalError(format!("failed to read request body: {}", e))
        })?;

        if body.len() + chunk.len() > limit.0 {
            return Err(AppError::PayloadTooLarge(limit.0));
        }
        body.extend_from_slice(&chunk);
    }

    Ok(body.freeze())
}

fn panic_detail(panic: &(dyn Any + Send)) -> String {
    if let Some(msg) = panic.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
