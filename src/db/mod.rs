//! User Store Module
//!
//! 사용자 컬렉션의 영구 저장을 담당하는 모듈입니다.
//! 컬렉션은 항상 통째로 읽고 통째로 씁니다.
//!
//! # 구현체
//!
//! - [`JsonFileStore`] - 들여쓰기된 JSON 배열 파일 (운영용)
//! - [`InMemoryStore`] - 프로세스 메모리 (테스트 / 임시 실행용)
//!
//! # 환경 변수 설정
//!
//! ```bash
//! # JSON 저장소 파일 경로
//! export USERS_FILE="/var/lib/registration/users.json"
//! ```
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::db::{JsonFileStore, UserStore};
//!
//! let store: Arc<dyn UserStore> = Arc::new(JsonFileStore::new("users.json"));
//! let users = store.load().await;
//! store.save(&users).await?;
//! ```

mod json_file_store;
mod memory_store;

pub use json_file_store::JsonFileStore;
pub use memory_store::InMemoryStore;

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::users::StoredUser;

/// 사용자 컬렉션 저장소 추상화
///
/// 리포지토리 계층은 이 trait에만 의존하므로 파일 저장소를 메모리 저장소나
/// 트랜잭션을 지원하는 저장소로 교체할 수 있습니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 로그 출력용 저장소 설명
    fn describe(&self) -> String;

    /// 전체 컬렉션을 읽습니다.
    ///
    /// 저장소가 없거나, 비어 있거나, JSON 배열로 해석할 수 없으면 빈 컬렉션을
    /// 반환합니다. 배열 안의 항목은 형태와 관계없이 그대로 보존합니다.
    /// 실패는 호출자에게 전파하지 않고 로그로만 남깁니다.
    async fn load(&self) -> Vec<StoredUser>;

    /// 전체 컬렉션으로 저장소를 덮어씁니다.
    async fn save(&self, users: &[StoredUser]) -> AppResult<()>;
}
