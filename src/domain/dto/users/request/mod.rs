//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! 검증하는 역할을 담당합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: UTF-8 / JSON 구조 (실패 시 500)
//! 2. **필수 필드 검증**: `validator`의 `required` 규칙 (실패 시 400)
//! 3. **비즈니스 검증**: 나이 제한, 중복 확인 (서비스 / 리포지토리 계층)

pub mod register_user;

pub use register_user::{RegisterUserRequest, RegistrationSubmission, MISSING_FIELDS_MESSAGE};
