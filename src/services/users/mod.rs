//! 사용자 관리 서비스 모듈
//!
//! 회원가입 입력 검증, 나이 제한, 레코드 생성을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let created = user_service.register_user(request).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
