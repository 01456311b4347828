//! Gregorian to Solar Hijri (Jalali) date conversion.

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Cumulative day count at the start of each Gregorian month (non-leap).
const GREGORIAN_MONTH_OFFSETS: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JalaliDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl JalaliDate {
    pub fn from_gregorian(date: NaiveDate) -> Self {
        let gy = date.year() as i64;
        let gm = date.month() as usize;
        let gd = date.day() as i64;

        let gy2 = if gm > 2 { gy + 1 } else { gy };
        let mut days = 355_666 + 365 * gy + (gy2 + 3) / 4 - (gy2 + 99) / 100
            + (gy2 + 399) / 400
            + gd
            + GREGORIAN_MONTH_OFFSETS[gm - 1];

        let mut jy = -1595 + 33 * (days / 12_053);
        days %= 12_053;
        jy += 4 * (days / 1461);
        days %= 1461;
        if days > 365 {
            jy += (days - 1) / 365;
            days = (days - 1) % 365;
        }

        let (month, day) = if days < 186 {
            (1 + days / 31, 1 + days % 31)
        } else {
            (7 + (days - 186) / 30, 1 + (days - 186) % 30)
        };

        Self {
            year: jy as i32,
            month: month as u32,
            day: day as u32,
        }
    }
}

impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jalali(y: i32, m: u32, d: u32) -> JalaliDate {
        JalaliDate::from_gregorian(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_nowruz() {
        assert_eq!(jalali(2024, 3, 20), JalaliDate { year: 1403, month: 1, day: 1 });
        assert_eq!(jalali(2025, 3, 21), JalaliDate { year: 1404, month: 1, day: 1 });
    }

    #[test]
    fn test_last_day_of_leap_year() {
        assert_eq!(jalali(2025, 3, 20), JalaliDate { year: 1403, month: 12, day: 30 });
        assert_eq!(jalali(2024, 3, 19), JalaliDate { year: 1402, month: 12, day: 29 });
    }

    #[test]
    fn test_second_half_of_year() {
        assert_eq!(jalali(2026, 10, 16), JalaliDate { year: 1405, month: 7, day: 24 });
        assert_eq!(jalali(2023, 12, 31), JalaliDate { year: 1402, month: 10, day: 10 });
    }

    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(jalali(2000, 1, 1).to_string(), "1378/10/11");
        assert_eq!(jalali(2024, 3, 20).to_string(), "1403/01/01");
    }
}
