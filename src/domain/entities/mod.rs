//! # Domain Entities
//!
//! 영구 저장되는 도메인 객체들입니다. 저장소 파일의 JSON 구조가
//! 곧 이 엔티티들의 직렬화 형태입니다.

pub mod users;
