//! 공통 유틸리티 함수 모듈
//!
//! 회원가입 파이프라인에서 사용하는 순수 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 요청 필드 정리 (빈 값 판정, serde deserializer)
//! - [`date_utils`] - 생년월일 해석 및 만 나이 계산
//! - [`id_generator`] - 사용자 ID 생성
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::date_utils::{calculate_age, parse_birth_date};
//! use crate::utils::id_generator::generate_user_id;
//!
//! let birth = parse_birth_date("2000-01-01").unwrap();
//! let age = calculate_age(birth, chrono::Local::now().date_naive());
//! let id = generate_user_id();
//! ```

pub mod string_utils;
pub mod date_utils;
pub mod id_generator;
