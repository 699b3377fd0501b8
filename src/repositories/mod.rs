//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserStore`](crate::db::UserStore) 위에서 도메인 규칙(유일성 제약)을
//! 적용하는 리포지토리들을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let user_repo = UserRepository::new(store);
//! let created = user_repo.create_unique(record).await?;
//! ```

pub mod users;
