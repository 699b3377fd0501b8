//! # 사용자 등록 서비스 구현
//!
//! 회원가입 요청을 검증하고 사용자 레코드를 만들어 저장하는 비즈니스 로직입니다.
//!
//! ## 처리 순서
//!
//! ```text
//! RegisterUserRequest
//!   │ 1. 필수 필드 검사          → 400 "all fields are required"
//!   │ 2. 생년월일 해석           → 400 "birthDate must be a valid date"
//!   │ 3. 만 나이 검사 (>= 16)    → 400 "age must be over 16"
//!   │ 4. 레코드 생성 (ID, 기본 이미지)
//!   ▼ 5. 유일성 검사 + 저장      → 400 "email already in use" / "nick already in use"
//! UserRecord
//! ```
//!
//! 비밀번호는 필수 입력이지만 어디에도 저장하거나 로그로 남기지 않습니다.

use std::sync::Arc;

use log::{debug, info};
use mockable::Clock;

use crate::{
    core::{
        clock::local_today,
        errors::{AppError, AppResult},
    },
    domain::{
        dto::users::request::RegisterUserRequest,
        entities::users::UserRecord,
    },
    repositories::users::UserRepository,
    utils::{
        date_utils::{calculate_age, parse_birth_date},
        id_generator::generate_user_id,
    },
};

/// 가입 가능한 최소 만 나이
pub const MINIMUM_AGE: i32 = 16;

pub const UNDERAGE_MESSAGE: &str = "age must be over 16";

pub const INVALID_BIRTH_DATE_MESSAGE: &str = "birthDate must be a valid date";

/// 사용자 등록 비즈니스 로직 서비스
///
/// 오늘 날짜는 주입받은 [`Clock`]에서, 신규 사용자 이미지 URL은 설정값에서 가져옵니다.
///
/// ```rust,ignore
/// let service = UserService::new(repo, Arc::new(DefaultClock), RegistrationConfig::default_image_url());
/// let created = service.register_user(request).await?;
/// ```
pub struct UserService {
    user_repo: Arc<UserRepository>,
    clock: Arc<dyn Clock>,
    default_image_url: String,
}

impl UserService {
    pub fn new(
        user_repo: Arc<UserRepository>,
        clock: Arc<dyn Clock>,
        default_image_url: impl Into<String>,
    ) -> Self {
        Self {
            user_repo,
            clock,
            default_image_url: default_image_url.into(),
        }
    }

    /// 새 사용자 등록
    ///
    /// # 반환값
    ///
    /// * `Ok(UserRecord)` - 저장된 사용자 (비밀번호 제외)
    /// * `Err(AppError::ValidationError)` - 입력값 또는 유일성 규칙 위반
    /// * `Err(AppError::StorageError)` - 저장 실패
    /// * `Err(AppError::InternalError)` - ID 충돌 등 시스템 오류
    pub async fn register_user(&self, request: RegisterUserRequest) -> AppResult<UserRecord> {
        let start_time = std::time::Instant::now();

        let submission = request.into_submission().inspect_err(|e| {
            debug!("Registration rejected: {}", e);
        })?;

        let birth = parse_birth_date(&submission.birth_date).ok_or_else(|| {
            debug!("Registration rejected: unparseable birth date");
            AppError::ValidationError(INVALID_BIRTH_DATE_MESSAGE.to_string())
        })?;

        let age = calculate_age(birth, local_today(self.clock.as_ref()));
        if age < MINIMUM_AGE {
            debug!("Registration rejected: age {} below minimum", age);
            return Err(AppError::ValidationError(UNDERAGE_MESSAGE.to_string()));
        }

        let user = UserRecord {
            id: generate_user_id(),
            name: submission.name,
            email: submission.email,
            nick: submission.nick,
            image_url: self.default_image_url.clone(),
            birth_date: submission.birth_date,
        };

        let created = self.user_repo.create_unique(user).await?;

        info!(
            "User registered: id={} (took {:?})",
            created.id,
            start_time.elapsed()
        );

        Ok(created)
    }
}
