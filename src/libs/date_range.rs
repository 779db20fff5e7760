//! Date range selection for message retrieval.
//!
//! A range is two calendar dates interpreted in a fixed UTC offset: it starts
//! at 00:00:00 of the first date and ends at the last instant of the last, both
//! inclusive. When no dates are given the whole previous calendar month is
//! used.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
use std::fmt;
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateRangeError {
    #[error("'{0}' is not a YYYY-MM-DD date")]
    InvalidDate(String),
    #[error("start date {start} is after end date {end}")]
    Inverted { start: NaiveDate, end: NaiveDate },
    #[error("UTC offset of {0} hours is out of range")]
    InvalidOffset(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
    offset: FixedOffset,
}

/// Builds a fixed offset from whole hours east of UTC.
pub fn offset_from_hours(hours: i32) -> Result<FixedOffset, DateRangeError> {
    hours.checked_mul(3600).and_then(FixedOffset::east_opt).ok_or(DateRangeError::InvalidOffset(hours))
}

pub fn parse_date(date_str: &str) -> Result<NaiveDate, DateRangeError> {
    NaiveDate::parse_from_str(date_str.trim(), DATE_FORMAT).map_err(|_| DateRangeError::InvalidDate(date_str.to_string()))
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate, offset: FixedOffset) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::Inverted { start, end });
        }
        Ok(Self { start, end, offset })
    }

    pub fn parse(start: &str, end: &str, offset: FixedOffset) -> Result<Self, DateRangeError> {
        Self::new(parse_date(start)?, parse_date(end)?, offset)
    }

    /// First through last day of the month before `today`.
    pub fn previous_month(today: NaiveDate, offset: FixedOffset) -> Self {
        let last = today.with_day(1).unwrap_or(today) - Duration::days(1);
        let first = last.with_day(1).unwrap_or(last);
        Self { start: first, end: last, offset }
    }

    /// Resolves optional CLI dates; missing ones come from the previous month.
    pub fn resolve(start: Option<&str>, end: Option<&str>, today: NaiveDate, offset: FixedOffset) -> Result<Self, DateRangeError> {
        let default = Self::previous_month(today, offset);
        let start = start.map(parse_date).transpose()?.unwrap_or(default.start);
        let end = end.map(parse_date).transpose()?.unwrap_or(default.end);
        Self::new(start, end, offset)
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// 00:00:00 of the start date.
    pub fn start_instant(&self) -> DateTime<Utc> {
        self.instant(self.start, NaiveTime::MIN)
    }

    /// Last representable instant of the end date.
    pub fn end_instant(&self) -> DateTime<Utc> {
        let end_of_day = NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap_or(NaiveTime::MIN);
        self.instant(self.end, end_of_day)
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start_instant() <= instant && instant <= self.end_instant()
    }

    fn instant(&self, date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
        // A fixed offset maps every local time to exactly one instant.
        match self.offset.from_local_datetime(&date.and_time(time)).single() {
            Some(local) => local.with_timezone(&Utc),
            None => date.and_time(time).and_utc(),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} - {}", self.start.format(DATE_FORMAT), self.end.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jst() -> FixedOffset {
        offset_from_hours(9).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn previous_month_spans_whole_month() {
        let range = DateRange::previous_month(date(2024, 3, 15), jst());
        assert_eq!(range.start, date(2024, 2, 1));
        assert_eq!(range.end, date(2024, 2, 29));

        let range = DateRange::previous_month(date(2025, 1, 1), jst());
        assert_eq!(range.start, date(2024, 12, 1));
        assert_eq!(range.end, date(2024, 12, 31));
    }

    #[test]
    fn bounds_are_inclusive_in_offset() {
        let range = DateRange::parse("2024-05-01", "2024-05-31", jst()).unwrap();
        assert_eq!(range.start_instant().to_rfc3339(), "2024-04-30T15:00:00+00:00");
        assert_eq!(range.end_instant().to_rfc3339(), "2024-05-31T14:59:59.999999999+00:00");
        assert!(range.contains(range.start_instant()));
        assert!(range.contains(range.end_instant()));
        assert!(!range.contains(range.end_instant() + Duration::nanoseconds(1)));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            DateRange::parse("2024/05/01", "2024-05-31", jst()),
            Err(DateRangeError::InvalidDate("2024/05/01".to_string()))
        );
        assert!(matches!(
            DateRange::parse("2024-06-01", "2024-05-31", jst()),
            Err(DateRangeError::Inverted { .. })
        ));
        assert_eq!(offset_from_hours(30), Err(DateRangeError::InvalidOffset(30)));
    }

    #[test]
    fn huge_offsets_are_errors() {
        assert_eq!(offset_from_hours(1_000_000), Err(DateRangeError::InvalidOffset(1_000_000)));
        assert_eq!(offset_from_hours(i32::MIN), Err(DateRangeError::InvalidOffset(i32::MIN)));
        // 1_193_047 * 3600 wraps to a small value in 32 bits.
        assert_eq!(offset_from_hours(1_193_047), Err(DateRangeError::InvalidOffset(1_193_047)));
    }

    #[test]
    fn resolve_fills_missing_dates() {
        let range = DateRange::resolve(Some("2024-02-10"), None, date(2024, 3, 15), jst()).unwrap();
        assert_eq!(range.start, date(2024, 2, 10));
        assert_eq!(range.end, date(2024, 2, 29));
        assert_eq!(range.to_string(), "2024-02-10 - 2024-02-29");
    }
}
