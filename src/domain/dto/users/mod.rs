//! 사용자 도메인 DTO
//!
//! 회원가입 응답은 저장된 [`UserRecord`](crate::domain::entities::users::UserRecord)를
//! 그대로 직렬화하므로 별도의 응답 DTO는 두지 않습니다.

pub mod request;

pub use request::*;
