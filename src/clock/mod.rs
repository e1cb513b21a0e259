//! Wall-clock reads go through a trait so paths and rendered lines can be pinned in tests.

use chrono::{Datelike, Local, NaiveDateTime, TimeZone, Timelike};
use std::fmt;

/// Calendar fields a log line and its file path are derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl Timestamp {
    #[must_use]
    pub const fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Current local time.
    #[must_use]
    pub fn now() -> Self {
        Self::from(Local::now())
    }

    /// Four-digit year for directory names.
    #[must_use]
    pub fn year4(&self) -> String {
        format!("{:04}", self.year)
    }

    /// Two-digit year for `%YY` — 2024 renders as `24`.
    #[must_use]
    pub fn year2(&self) -> String {
        format!("{:02}", self.year.rem_euclid(100))
    }

    #[must_use]
    pub fn month2(&self) -> String {
        format!("{:02}", self.month)
    }

    #[must_use]
    pub fn day2(&self) -> String {
        format!("{:02}", self.day)
    }

    #[must_use]
    pub fn hour2(&self) -> String {
        format!("{:02}", self.hour)
    }

    #[must_use]
    pub fn minute2(&self) -> String {
        format!("{:02}", self.minute)
    }

    #[must_use]
    pub fn second2(&self) -> String {
        format!("{:02}", self.second)
    }
}

impl<Tz: TimeZone> From<chrono::DateTime<Tz>> for Timestamp {
    fn from(dt: chrono::DateTime<Tz>) -> Self {
        Self::from(dt.naive_local())
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(dt: NaiveDateTime) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Time source consumed by the logger.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Always answers the same instant — deterministic file paths for tests and benches.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn from_naive_datetime_copies_fields() {
        let dt = NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 2)
            .unwrap();
        assert_eq!(Timestamp::from(dt), Timestamp::new(2024, 3, 7, 9, 5, 2));
    }

    #[test]
    fn padded_fields() {
        let ts = Timestamp::new(2024, 3, 7, 9, 5, 2);
        assert_eq!(ts.year4(), "2024");
        assert_eq!(ts.year2(), "24");
        assert_eq!(ts.month2(), "03");
        assert_eq!(ts.day2(), "07");
        assert_eq!(ts.hour2(), "09");
        assert_eq!(ts.minute2(), "05");
        assert_eq!(ts.second2(), "02");
    }

    #[test]
    fn year2_wraps_century() {
        assert_eq!(Timestamp::new(2000, 1, 1, 0, 0, 0).year2(), "00");
        assert_eq!(Timestamp::new(1999, 1, 1, 0, 0, 0).year2(), "99");
    }

    #[test]
    fn display_is_iso_like() {
        let ts = Timestamp::new(2024, 3, 7, 9, 5, 2);
        assert_eq!(ts.to_string(), "2024-03-07 09:05:02");
    }
}
