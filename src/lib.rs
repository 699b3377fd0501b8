//! 회원가입 서비스
//!
//! 사용자 등록 요청을 검증하고(필수 필드, 만 16세 이상, 이메일/닉네임 유일성)
//! JSON 파일 저장소에 기록하는 Actix-web 기반 HTTP 서비스입니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← POST /users, 그 외 404
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 본문 수집, 에러 경계
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 입력 검증, 나이 제한
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 유일성 검사 + 저장 (직렬화)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    UserStore    │ ← JSON 파일 / 메모리
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_registration_service::core::clock::DefaultClock;
//! use user_registration_service::db::JsonFileStore;
//! use user_registration_service::repositories::users::UserRepository;
//! use user_registration_service::services::users::UserService;
//!
//! let repo = Arc::new(UserRepository::new(Arc::new(JsonFileStore::new("users.json"))));
//! let service = UserService::new(repo, Arc::new(DefaultClock), "https://example.com/default-image.jpg");
//! let user = service.register_user(request).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
