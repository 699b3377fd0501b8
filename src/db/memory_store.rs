//! 메모리 저장소
//!
//! 프로세스 메모리에 컬렉션을 보관합니다. 테스트에서 파일 저장소 대신 주입하며,
//! `fail_saves`로 저장 실패 경로를 재현할 수 있습니다.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use super::UserStore;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::StoredUser;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: RwLock<Vec<StoredUser>>,
    fail_saves: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<StoredUser>) -> Self {
        Self {
            users: RwLock::new(users),
            fail_saves: AtomicBool::new(false),
        }
    }

    /// 현재 저장된 컬렉션의 복사본
    pub fn snapshot(&self) -> Vec<StoredUser> {
        self.users.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// 이후 `save` 호출이 실패하도록 설정합니다.
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    fn describe(&self) -> String {
        "in-memory".to_string()
    }

    async fn load(&self) -> Vec<StoredUser> {
        self.snapshot()
    }

    async fn save(&self, users: &[StoredUser]) -> AppResult<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(AppError::StorageError("in-memory store rejected write".to_string()));
        }

        *self.users.write().unwrap_or_else(|e| e.into_inner()) = users.to_vec();
        Ok(())
    }
}
