use crate::domain::ports::clock::Clock;
use crate::domain::values::jalali::JalaliDate;
use chrono::{DateTime, Duration, Timelike, Utc};

/// Iran Standard Time, UTC+03:30. Iran has not observed DST since 2022.
const TEHRAN_OFFSET_SECS: i64 = 3 * 3600 + 30 * 60;

/// Formats the current Tehran wall-clock time as `YYYY/MM/DD, HH:MM` in the
/// Solar Hijri calendar.
#[derive(Debug, Clone, Copy)]
pub struct JalaliClock {
    offset_secs: i64,
}

impl JalaliClock {
    pub fn tehran() -> Self {
        Self {
            offset_secs: TEHRAN_OFFSET_SECS,
        }
    }

    pub fn format(&self, instant: DateTime<Utc>) -> String {
        let local = instant.naive_utc() + Duration::seconds(self.offset_secs);
        let date = JalaliDate::from_gregorian(local.date());
        format!("{date}, {:02}:{:02}", local.hour(), local.minute())
    }
}

impl Default for JalaliClock {
    fn default() -> Self {
        Self::tehran()
    }
}

impl Clock for JalaliClock {
    fn now_string(&self) -> String {
        self.format(Utc::now())
    }
}
