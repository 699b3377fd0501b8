//! # 회원가입 요청 DTO
//!
//! `POST /users` 요청 본문을 표현합니다.
//!
//! ## 필드
//!
//! | JSON 필드 | 설명 |
//! |-----------|------|
//! | `name` | 사용자 이름 |
//! | `email` | 이메일 (고유) |
//! | `password` | 비밀번호 (필수, 저장하지 않음) |
//! | `birthDate` | 생년월일 (`YYYY-MM-DD` 또는 RFC 3339) |
//! | `nick` | 닉네임 (고유) |
//!
//! 다섯 필드 모두 존재하고 비어 있지 않아야 합니다. 비어 있음의 기준은
//! [`truthy_field`](crate::utils::string_utils::truthy_field)를 따릅니다.
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "name": "Ana Souza",
//!   "email": "ana@example.com",
//!   "password": "s3cret",
//!   "birthDate": "2000-01-01",
//!   "nick": "ana"
//! }
//! ```

use std::fmt;

use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::utils::string_utils::deserialize_truthy_field;

/// 필수 필드 누락 시 메시지
pub const MISSING_FIELDS_MESSAGE: &str = "all fields are required";

/// 회원가입 요청 DTO
///
/// 역직렬화 자체는 필드 타입 때문에 실패하지 않습니다. 누락 여부는
/// `validator`의 `required` 규칙으로 검사합니다.
#[derive(Clone, Default, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[serde(default, deserialize_with = "deserialize_truthy_field")]
    #[validate(required(message = "all fields are required"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_truthy_field")]
    #[validate(required(message = "all fields are required"))]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "deserialize_truthy_field")]
    #[validate(required(message = "all fields are required"))]
    pub password: Option<String>,

    #[serde(default, rename = "birthDate", deserialize_with = "deserialize_truthy_field")]
    #[validate(required(message = "all fields are required"))]
    pub birth_date: Option<String>,

    #[serde(default, deserialize_with = "deserialize_truthy_field")]
    #[validate(required(message = "all fields are required"))]
    pub nick: Option<String>,
}

impl RegisterUserRequest {
    /// 요청 본문 바이트를 DTO로 변환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(RegisterUserRequest)` - JSON으로 해석 가능한 본문.
    ///   객체가 아닌 JSON(배열, 문자열, 숫자, 불리언)은 모든 필드가 빈 요청으로 취급합니다.
    /// * `Err(AppError::InternalError)` - UTF-8 / JSON 구문 오류, 또는 본문이 `null`
    pub fn from_json_body(body: &[u8]) -> AppResult<Self> {
        let value: Value = serde_json::from_slice(body).context("malformed request body")?;

        match value {
            Value::Object(_) => serde_json::from_value(value).context("unreadable request body"),
            // null에서는 필드를 읽을 수 없음
            Value::Null => Err(AppError::InternalError("request body is null".to_string())),
            _ => Ok(Self::default()),
        }
    }

    /// 필수 필드를 검증하고 제출 값으로 변환합니다.
    ///
    /// 하나라도 비어 있으면 `ValidationError("all fields are required")`를 반환합니다.
    pub fn into_submission(self) -> AppResult<RegistrationSubmission> {
        self.validate()
            .map_err(|_| AppError::ValidationError(MISSING_FIELDS_MESSAGE.to_string()))?;

        let (Some(name), Some(email), Some(password), Some(birth_date), Some(nick)) =
            (self.name, self.email, self.password, self.birth_date, self.nick)
        else {
            return Err(AppError::ValidationError(MISSING_FIELDS_MESSAGE.to_string()));
        };

        Ok(RegistrationSubmission {
            name,
            email,
            password,
            birth_date,
            nick,
        })
    }
}

impl fmt::Debug for RegisterUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterUserRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("birth_date", &self.birth_date)
            .field("nick", &self.nick)
            .finish()
    }
}

/// 필수 필드 검증을 통과한 제출 값
///
/// `password`는 검증 후 버려지며 레코드에 저장되지 않습니다.
#[derive(Clone)]
pub struct RegistrationSubmission {
    pub name: String,
    pub email: String,
    pub password: String,
    pub birth_date: String,
    pub nick: String,
}

impl fmt::Debug for RegistrationSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationSubmission")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("birth_date", &self.birth_date)
            .field("nick", &self.nick)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_BODY: &str = r#"{
        "name": "Ana",
        "email": "ana@example.com",
        "password": "p",
        "birthDate": "2000-01-01",
        "nick": "ana"
    }"#;

    fn expect_missing_fields(body: &str) {
        let request = RegisterUserRequest::from_json_body(body.as_bytes()).unwrap();
        match request.into_submission() {
            Err(AppError::ValidationError(msg)) => assert_eq!(msg, MISSING_FIELDS_MESSAGE),
            other => panic!("expected missing-fields error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_body_yields_submission() {
        let submission = RegisterUserRequest::from_json_body(VALID_BODY.as_bytes())
            .unwrap()
            .into_submission()
            .unwrap();

        assert_eq!(submission.name, "Ana");
        assert_eq!(submission.email, "ana@example.com");
        assert_eq!(submission.password, "p");
        assert_eq!(submission.birth_date, "2000-01-01");
        assert_eq!(submission.nick, "ana");
    }

    #[test]
    fn test_each_missing_or_falsy_field_is_rejected() {
        for field in ["name", "email", "password", "birthDate", "nick"] {
            let mut body: Value = serde_json::from_str(VALID_BODY).unwrap();
            body.as_object_mut().unwrap().remove(field);
            expect_missing_fields(&body.to_string());

            for falsy in [Value::Null, Value::from(""), Value::from(0), Value::from(false)] {
                let mut body: Value = serde_json::from_str(VALID_BODY).unwrap();
                body[field] = falsy;
                expect_missing_fields(&body.to_string());
            }
        }
    }

    #[test]
    fn test_non_object_json_counts_as_missing_fields() {
        expect_missing_fields("[]");
        expect_missing_fields("\"hello\"");
        expect_missing_fields("42");
        expect_missing_fields("true");
    }

    #[test]
    fn test_null_body_is_internal_error() {
        for body in ["null", "  null\n"] {
            assert!(matches!(
                RegisterUserRequest::from_json_body(body.as_bytes()),
                Err(AppError::InternalError(_))
            ));
        }
    }

    #[test]
    fn test_malformed_body_is_internal_error() {
        for body in [&b"{not json"[..], &b""[..], &[0xff, 0xfe, 0x7b][..]] {
            assert!(matches!(
                RegisterUserRequest::from_json_body(body),
                Err(AppError::InternalError(_))
            ));
        }
    }

    #[test]
    fn test_debug_output_redacts_password() {
        let request = RegisterUserRequest::from_json_body(VALID_BODY.as_bytes()).unwrap();
        let rendered = format!("{:?}", request);
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("\"p\""));

        let submission = request.into_submission().unwrap();
        assert!(format!("{:?}", submission).contains("<redacted>"));
    }
}
