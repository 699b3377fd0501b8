//! # Configuration Module
//!
//! 회원가입 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 저장소, 회원가입 기본값, Rate Limiting 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export MAX_BODY_BYTES="65536"
//!
//! # 저장소
//! export USERS_FILE="/var/lib/registration/users.json"
//!
//! # 회원가입 기본값
//! export DEFAULT_IMAGE_URL="https://cdn.example.com/avatar.png"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="20"
//! export RATE_LIMIT_BURST_SIZE="40"
//! ```
//!
//! `PROFILE` 값에 따라 `.env.dev` / `.env.prod` / `.env` 파일이 먼저 로드됩니다
//! (`main.rs` 참고).

pub mod data_config;

pub use data_config::*;
