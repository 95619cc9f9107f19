//! Calendar primitives for day-granular rostering.
//!
//! Days of the week are plain integers `0..=6` (Monday = 0, Sunday = 6),
//! which is how employee restrictions and fixed assignments are entered.
//! Monday–Friday form the weekday pool; Saturday and Sunday form the
//! weekend pool.
//!
//! # Weeks
//! Week counting uses ISO 8601 weeks (`(iso_year, week)` pairs), so a
//! window that starts on a Sunday and ends on the following Monday spans
//! two weeks.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Day-of-week index (0 = Monday … 6 = Sunday).
pub type DayOfWeek = u8;

pub const MONDAY: DayOfWeek = 0;
pub const TUESDAY: DayOfWeek = 1;
pub const WEDNESDAY: DayOfWeek = 2;
pub const THURSDAY: DayOfWeek = 3;
pub const FRIDAY: DayOfWeek = 4;
pub const SATURDAY: DayOfWeek = 5;
pub const SUNDAY: DayOfWeek = 6;

/// English day names, indexed by [`DayOfWeek`].
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Day-of-week index of a date.
#[inline]
pub fn day_of_week(date: NaiveDate) -> DayOfWeek {
    date.weekday().num_days_from_monday() as DayOfWeek
}

/// Whether the day belongs to the weekday pool (Mon–Fri).
#[inline]
pub fn is_weekday(dow: DayOfWeek) -> bool {
    dow <= FRIDAY
}

/// Whether the day belongs to the weekend pool (Sat–Sun).
#[inline]
pub fn is_weekend(dow: DayOfWeek) -> bool {
    dow == SATURDAY || dow == SUNDAY
}

/// Display name of a day-of-week index, `"?"` when out of range.
pub fn weekday_name(dow: DayOfWeek) -> &'static str {
    WEEKDAY_NAMES.get(dow as usize).copied().unwrap_or("?")
}

/// ISO week key `(iso_year, week)` of a date.
#[inline]
pub fn iso_week_key(date: NaiveDate) -> (i32, u32) {
    let w = date.iso_week();
    (w.year(), w.week())
}

/// Monday and Sunday of an ISO week, or `None` if the week does not exist.
pub fn iso_week_bounds(year: i32, week: u32) -> Option<(NaiveDate, NaiveDate)> {
    let monday = NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)?;
    Some((monday, monday + Duration::days(6)))
}

/// Date window covering ISO weeks `first..=last` of a year.
pub fn date_range_from_weeks(year: i32, first: u32, last: u32) -> Option<DateRange> {
    let (start, _) = iso_week_bounds(year, first)?;
    let (_, end) = iso_week_bounds(year, last)?;
    (start <= end).then(|| DateRange::new(start, end))
}

/// An inclusive date range `[start, end]`.
///
/// Used for vacation periods. A range with `end < start` is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day (inclusive).
    pub start: NaiveDate,
    /// Last day (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new range.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// A single-day range.
    pub fn single(day: NaiveDate) -> Self {
        Self::new(day, day)
    }

    /// Whether the date falls inside the range.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days covered (0 for an empty range).
    pub fn len_days(&self) -> i64 {
        ((self.end - self.start).num_days() + 1).max(0)
    }

    /// Whether the range covers no day.
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// All dates in the range, in order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.start
            .iter_days()
            .take_while(|d| *d <= self.end)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_day_of_week() {
        // 2024-01-01 is a Monday
        assert_eq!(day_of_week(d(2024, 1, 1)), MONDAY);
        assert_eq!(day_of_week(d(2024, 1, 5)), FRIDAY);
        assert_eq!(day_of_week(d(2024, 1, 7)), SUNDAY);
        assert!(is_weekday(FRIDAY));
        assert!(!is_weekday(SATURDAY));
        assert!(is_weekend(SUNDAY));
        assert_eq!(weekday_name(THURSDAY), "Thursday");
        assert_eq!(weekday_name(9), "?");
    }

    #[test]
    fn test_range_contains_and_len() {
        let r = DateRange::new(d(2024, 1, 3), d(2024, 1, 5));
        assert!(r.contains(d(2024, 1, 3)));
        assert!(r.contains(d(2024, 1, 5)));
        assert!(!r.contains(d(2024, 1, 6)));
        assert_eq!(r.len_days(), 3);
        assert_eq!(r.dates().len(), 3);

        let empty = DateRange::new(d(2024, 1, 5), d(2024, 1, 3));
        assert!(empty.is_empty());
        assert_eq!(empty.len_days(), 0);
        assert!(empty.dates().is_empty());
    }

    #[test]
    fn test_iso_week_bounds() {
        let (mon, sun) = iso_week_bounds(2024, 1).unwrap();
        assert_eq!(mon, d(2024, 1, 1));
        assert_eq!(sun, d(2024, 1, 7));
        // 2020 has 53 ISO weeks, 2021 does not
        assert!(iso_week_bounds(2020, 53).is_some());
        assert!(iso_week_bounds(2021, 53).is_none());
    }

    #[test]
    fn test_date_range_from_weeks() {
        let r = date_range_from_weeks(2024, 2, 3).unwrap();
        assert_eq!(r.start, d(2024, 1, 8));
        assert_eq!(r.end, d(2024, 1, 21));
        assert!(date_range_from_weeks(2024, 3, 2).is_none());
    }

    #[test]
    fn test_iso_week_key_spans_year() {
        // 2024-12-30 belongs to ISO week 1 of 2025
        assert_eq!(iso_week_key(d(2024, 12, 30)), (2025, 1));
        assert_eq!(iso_week_key(d(2024, 12, 29)), (2024, 52));
    }
}
