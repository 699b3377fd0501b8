//! # 문자열 유틸리티
//!
//! 요청 필드를 문자열로 정리하는 공통 유틸리티 함수들입니다.

use serde::Deserialize;
use serde_json::Value;

/// JSON 값을 필수 필드용 문자열로 정리
///
/// 값이 비어 있는(falsy) 경우 `None`을 반환합니다.
///
/// | 입력 | 결과 |
/// |------|------|
/// | `"abc"` | `Some("abc")` |
/// | `""`, `null`, `false`, `0` | `None` |
/// | `true`, `42`, `1.5` | `Some("true")`, `Some("42")`, `Some("1.5")` |
/// | 배열, 객체 | `None` (스칼라 필드로 사용할 수 없음) |
///
/// 문자열은 공백을 제거하지 않고 원문 그대로 보존합니다.
///
/// # 예제
/// ```rust,ignore
/// use serde_json::json;
/// use crate::utils::string_utils::truthy_field;
///
/// assert_eq!(truthy_field(json!("  Ana ")), Some("  Ana ".to_string()));
/// assert_eq!(truthy_field(json!(0)), None);
/// ```
pub fn truthy_field(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
        _ => None,
    }
}

/// 필수 필드를 위한 serde deserializer
///
/// 어떤 JSON 타입이 오더라도 실패하지 않고 [`truthy_field`] 규칙으로 정리합니다.
/// 필드 누락을 허용하려면 `#[serde(default)]`와 함께 사용해야 합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct Form {
///     #[serde(default, deserialize_with = "deserialize_truthy_field")]
///     nick: Option<String>,
/// }
///
/// // {"nick": "ana"} → Some("ana")
/// // {"nick": ""}    → None
/// // {"nick": null}  → None
/// // {}              → None
/// ```
pub fn deserialize_truthy_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(truthy_field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthy_field_keeps_non_empty_strings_verbatim() {
        assert_eq!(truthy_field(json!("Hello")), Some("Hello".to_string()));
        assert_eq!(truthy_field(json!("  padded  ")), Some("  padded  ".to_string()));
        assert_eq!(truthy_field(json!("0")), Some("0".to_string()));
        assert_eq!(truthy_field(json!("안녕하세요")), Some("안녕하세요".to_string()));
    }

    #[test]
    fn test_truthy_field_drops_falsy_values() {
        assert_eq!(truthy_field(json!("")), None);
        assert_eq!(truthy_field(json!(null)), None);
        assert_eq!(truthy_field(json!(false)), None);
        assert_eq!(truthy_field(json!(0)), None);
        assert_eq!(truthy_field(json!(0.0)), None);
    }

    #[test]
    fn test_truthy_field_coerces_scalars_and_rejects_containers() {
        assert_eq!(truthy_field(json!(true)), Some("true".to_string()));
        assert_eq!(truthy_field(json!(42)), Some("42".to_string()));
        assert_eq!(truthy_field(json!(-1.5)), Some("-1.5".to_string()));
        assert_eq!(truthy_field(json!(["a"])), None);
        assert_eq!(truthy_field(json!({ "a": 1 })), None);
    }

    #[test]
    fn test_deserialize_truthy_field() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_truthy_field")]
            field: Option<String>,
        }

        let result: TestStruct = serde_json::from_str(r#"{"field": "ana"}"#).unwrap();
        assert_eq!(result.field, Some("ana".to_string()));

        let result: TestStruct = serde_json::from_str(r#"{"field": ""}"#).unwrap();
        assert_eq!(result.field, None);

        let result: TestStruct = serde_json::from_str(r#"{"field": null}"#).unwrap();
        assert_eq!(result.field, None);

        let result: TestStruct = serde_json::from_str(r#"{"field": {"nested": true}}"#).unwrap();
        assert_eq!(result.field, None);

        let result: TestStruct = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(result.field, None);
    }
}
