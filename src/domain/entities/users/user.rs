//! User Entity Implementation
//!
//! - [`UserRecord`]: 회원가입으로 새로 만들어지는 레코드. JSON 필드명은
//!   `id`, `name`, `email`, `nick`, `imageUrl`, `birthDate` 순서로 직렬화됩니다.
//! - [`StoredUser`]: 저장소에 이미 기록된 항목. 형태를 강제하지 않고 JSON 값을
//!   그대로 보존하므로 필드가 빠졌거나 추가 필드가 있는 기존 항목도 유실되지 않습니다.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 사용자 레코드
///
/// 비밀번호는 회원가입 시 필수 입력이지만 레코드에는 저장하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// 불투명한 고유 식별자
    pub id: String,
    /// 사용자 이름
    pub name: String,
    /// 이메일 (unique)
    pub email: String,
    /// 닉네임 (unique)
    pub nick: String,
    /// 프로필 이미지 URL
    pub image_url: String,
    /// 제출된 생년월일 문자열 (원문 그대로 보존)
    pub birth_date: String,
}

/// 저장소 컬렉션의 한 항목
///
/// 유일성 비교는 문자열 값끼리의 정확한 일치(대소문자 구분)만 인정합니다.
/// 해당 필드가 없거나 문자열이 아니면 어떤 값과도 일치하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoredUser(Value);

impl StoredUser {
    /// 문자열 필드 값
    pub fn field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn id(&self) -> Option<&str> {
        self.field("id")
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.field("id") == Some(id)
    }

    pub fn has_email(&self, email: &str) -> bool {
        self.field("email") == Some(email)
    }

    pub fn has_nick(&self, nick: &str) -> bool {
        self.field("nick") == Some(nick)
    }
}

impl From<Value> for StoredUser {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<&UserRecord> for StoredUser {
    fn from(user: &UserRecord) -> Self {
        let mut fields = Map::new();
        fields.insert("id".to_string(), Value::String(user.id.clone()));
        fields.insert("name".to_string(), Value::String(user.name.clone()));
        fields.insert("email".to_string(), Value::String(user.email.clone()));
        fields.insert("nick".to_string(), Value::String(user.nick.clone()));
        fields.insert("imageUrl".to_string(), Value::String(user.image_url.clone()));
        fields.insert("birthDate".to_string(), Value::String(user.birth_date.clone()));
        Self(Value::Object(fields))
    }
}

impl From<UserRecord> for StoredUser {
    fn from(user: UserRecord) -> Self {
        Self::from(&user)
    }
}
