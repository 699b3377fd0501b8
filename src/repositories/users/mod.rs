//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`](user_repo::UserRepository)는 이메일/닉네임 유일성 검사와
//! 컬렉션 저장을 하나의 임계 구역으로 묶어 제공합니다.

pub mod user_repo;

pub use user_repo::{UserRepository, EMAIL_TAKEN_MESSAGE, NICK_TAKEN_MESSAGE};
