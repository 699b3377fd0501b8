//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 본문 수집, 에러 경계        ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 입력 검증, 나이 제한                 ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 유일성 검사 + 저장               ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Store - JSON 파일 / 메모리                      ← Storage Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하고, 에러 응답 변환은
//! [`AppError`](crate::core::errors::AppError)의 `ResponseError` 구현이 담당합니다.

pub mod users;
