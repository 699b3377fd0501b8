//! 현재 날짜 공급자
//!
//! 나이 제한 검사는 "오늘"에 의존하므로 서비스가 직접 시스템 시계를 읽지 않고
//! [`mockable::Clock`]을 주입받습니다. 운영에서는 [`DefaultClock`], 테스트에서는
//! 날짜를 고정한 시계를 사용합니다.

use chrono::NaiveDate;
use mockable::Clock;

pub use mockable::DefaultClock;

/// 서버 로컬 타임존 기준 오늘 날짜
pub fn local_today(clock: &dyn Clock) -> NaiveDate {
    clock.local().date_naive()
}

/// 항상 같은 날짜(로컬 정오)를 반환하는 시계
#[cfg(test)]
pub(crate) struct FixedClock(pub NaiveDate);

#[cfg(test)]
impl Clock for FixedClock {
    fn local(&self) -> chrono::DateTime<chrono::Local> {
        use chrono::TimeZone;

        let noon = self.0.and_hms_opt(12, 0, 0).expect("noon is a valid time");
        chrono::Local
            .from_local_datetime(&noon)
            .earliest()
            .expect("local noon exists")
    }

    fn utc(&self) -> chrono::DateTime<chrono::Utc> {
        self.local().with_timezone(&chrono::Utc)
    }
}
