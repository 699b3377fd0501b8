//! # Core Module
//!
//! 서비스 전반에서 공유하는 핵심 타입을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 JSON 응답 자동 변환
//! - **정보 은닉**: 5xx 에러의 상세 내용은 로그로만 기록
//!
//! ### [`clock`] - 현재 날짜 공급자
//! - **local_today**: 주입된 `mockable::Clock` 기준 로컬 날짜
//! - **DefaultClock**: 시스템 시계 (`mockable` 재노출)

pub mod clock;
pub mod errors;

pub use clock::*;
pub use errors::*;
