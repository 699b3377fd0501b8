//! # 사용자 리포지토리 구현
//!
//! 사용자 컬렉션에 대한 유일성 검사와 추가를 담당합니다.
//! 저장소는 컬렉션 전체를 읽고 쓰므로, 읽기-검사-추가-저장 과정을
//! 하나의 비동기 뮤텍스로 직렬화합니다. 동시에 같은 이메일로 가입해도
//! 하나만 성공합니다.

use std::sync::Arc;

use futures_util::lock::Mutex;
use log::debug;

use crate::{
    core::errors::{AppError, AppResult},
    db::UserStore,
    domain::entities::users::{StoredUser, UserRecord},
};

/// 이메일 중복 시 응답 메시지
pub const EMAIL_TAKEN_MESSAGE: &str = "email already in use";

/// 닉네임 중복 시 응답 메시지
pub const NICK_TAKEN_MESSAGE: &str = "nick already in use";

/// 사용자 데이터 액세스 리포지토리
///
/// ## 유일성 규칙
///
/// - 이메일, 닉네임 모두 대소문자를 구분한 정확한 일치로 비교
/// - 이메일 중복을 먼저 검사하고, 그 다음 닉네임을 검사
/// - ID 충돌은 클라이언트 오류가 아닌 내부 오류
///
/// 기존 항목은 읽은 그대로 다시 기록되므로 누락 필드나 추가 필드도 보존됩니다.
///
/// ```rust,ignore
/// let repo = UserRepository::new(Arc::new(JsonFileStore::new("users.json")));
/// let created = repo.create_unique(record).await?;
/// ```
pub struct UserRepository {
    store: Arc<dyn UserStore>,
    write_lock: Mutex<()>,
}

impl UserRepository {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// 유일성 검사 후 사용자를 컬렉션 끝에 추가하고 저장합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(UserRecord)` - 저장된 레코드
    /// * `Err(AppError::ValidationError)` - 이메일 또는 닉네임 중복
    /// * `Err(AppError::InternalError)` - ID 충돌
    /// * `Err(AppError::StorageError)` - 저장 실패 (컬렉션은 변경되지 않음)
    pub async fn create_unique(&self, user: UserRecord) -> AppResult<UserRecord> {
        let _guard = self.write_lock.lock().await;

        let mut users: Vec<StoredUser> = self.store.load().await;

        if users.iter().any(|u| u.has_email(&user.email)) {
            debug!("Registration rejected: duplicate email");
            return Err(AppError::ValidationError(EMAIL_TAKEN_MESSAGE.to_string()));
        }

        if users.iter().any(|u| u.has_nick(&user.nick)) {
            debug!("Registration rejected: duplicate nick");
            return Err(AppError::ValidationError(NICK_TAKEN_MESSAGE.to_string()));
        }

        if users.iter().any(|u| u.has_id(&user.id)) {
            return Err(AppError::InternalError(format!(
                "generated user id collides with existing record: {}",
                user.id
            )));
        }

        users.push(StoredUser::from(&user));
        self.store.save(&users).await?;

        debug!("User collection persisted ({} records)", users.len());
        Ok(user)
    }
}
