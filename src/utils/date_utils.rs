//! # 날짜 유틸리티
//!
//! 생년월일 해석과 만 나이 계산을 담당합니다.

use chrono::{DateTime, Datelike, NaiveDate};

/// 생년월일 문자열을 달력 날짜로 해석합니다.
///
/// 허용 형식:
/// - `YYYY-MM-DD` (예: `2000-01-31`)
/// - RFC 3339 타임스탬프 (예: `2000-01-31T10:00:00-03:00`), 해당 오프셋 기준 날짜 사용
///
/// 앞뒤 공백은 무시합니다. 해석할 수 없으면 `None`을 반환합니다.
pub fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

/// 만 나이를 계산합니다.
///
/// 연도 차이에서, 올해 생일(월/일)이 아직 지나지 않았다면 1을 뺍니다.
/// 2월 29일생은 평년에는 3월 1일에 나이가 올라갑니다.
/// `today`가 `birth`보다 이전이면 음수가 될 수 있습니다.
///
/// # 예제
/// ```rust,ignore
/// use chrono::NaiveDate;
/// use crate::utils::date_utils::calculate_age;
///
/// let birth = NaiveDate::from_ymd_opt(2008, 3, 10).unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
/// assert_eq!(calculate_age(birth, today), 15);
/// ```
pub fn calculate_age(birth: NaiveDate, today: NaiveDate) -> i32 {
    let age = today.year() - birth.year();

    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age - 1
    } else {
        age
    }
}
