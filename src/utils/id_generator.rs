//! # 사용자 ID 생성기
//!
//! 128비트 난수 기반(UUID v4) 식별자를 32자리 소문자 16진수 문자열로 생성합니다.

use uuid::Uuid;

/// 새 사용자 ID를 생성합니다.
///
/// ```rust,ignore
/// let id = generate_user_id();
/// assert_eq!(id.len(), 32);
/// ```
pub fn generate_user_id() -> String {
    Uuid::new_v4().simple().to_string()
}
