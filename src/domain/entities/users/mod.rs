//! 사용자 엔티티 모듈
//!
//! - [`UserRecord`](user::UserRecord) - 새로 등록되는 사용자 레코드
//! - [`StoredUser`](user::StoredUser) - 저장소에 기록된 항목 (형태 보존)

pub mod user;

pub use user::{StoredUser, UserRecord};
