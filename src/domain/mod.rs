//! # Domain Layer Module
//!
//! 회원가입 도메인의 데이터 구조를 담당합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 저장소에 기록되는 사용자 레코드
//! └── DTOs      - 회원가입 요청 데이터
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```

pub mod entities;
pub mod dto;
