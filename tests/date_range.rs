#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, TimeZone, Utc};
    use dailytally::libs::date_range::{offset_from_hours, DateRange, DateRangeError};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_previous_month_defaults() {
        let jst = offset_from_hours(9).unwrap();
        let range = DateRange::resolve(None, None, date(2024, 3, 15), jst).unwrap();
        assert_eq!(range.start, date(2024, 2, 1));
        assert_eq!(range.end, date(2024, 2, 29));

        let range = DateRange::resolve(None, None, date(2024, 1, 1), jst).unwrap();
        assert_eq!(range.to_string(), "2023-12-01 - 2023-12-31");
    }

    #[test]
    fn test_partial_dates_fill_from_previous_month() {
        let jst = offset_from_hours(9).unwrap();
        let range = DateRange::resolve(Some("2024-04-10"), None, date(2024, 5, 20), jst).unwrap();
        assert_eq!(range.start, date(2024, 4, 10));
        assert_eq!(range.end, date(2024, 4, 30));
    }

    #[test]
    fn test_invalid_ranges() {
        let jst = offset_from_hours(9).unwrap();
        assert!(matches!(DateRange::parse("2024-13-01", "2024-12-31", jst), Err(DateRangeError::InvalidDate(_))));
        assert!(matches!(DateRange::parse("2024-05-02", "2024-05-01", jst), Err(DateRangeError::Inverted { .. })));
        assert_eq!(offset_from_hours(30), Err(DateRangeError::InvalidOffset(30)));
    }

    #[test]
    fn test_bounds_follow_offset() {
        let jst = offset_from_hours(9).unwrap();
        let range = DateRange::parse("2024-05-01", "2024-05-31", jst).unwrap();

        assert_eq!(range.start_instant(), Utc.with_ymd_and_hms(2024, 4, 30, 15, 0, 0).unwrap());
        assert_eq!(
            range.end_instant(),
            Utc.with_ymd_and_hms(2024, 5, 31, 14, 59, 59).unwrap() + Duration::nanoseconds(999_999_999)
        );

        assert!(range.contains(Utc.with_ymd_and_hms(2024, 4, 30, 15, 0, 0).unwrap()));
        assert!(range.contains(Utc.with_ymd_and_hms(2024, 5, 31, 14, 59, 59).unwrap()));
        assert!(!range.contains(Utc.with_ymd_and_hms(2024, 4, 30, 14, 59, 59).unwrap()));
        assert!(!range.contains(Utc.with_ymd_and_hms(2024, 5, 31, 15, 0, 0).unwrap()));
    }

    #[test]
    fn test_single_day_range() {
        let utc = offset_from_hours(0).unwrap();
        let range = DateRange::parse("2024-05-01", "2024-05-01", utc).unwrap();
        assert!(range.contains(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()));
        assert_eq!(range.offset(), utc);
    }

    #[test]
    fn test_subsecond_messages_on_last_day() {
        let utc = offset_from_hours(0).unwrap();
        let range = DateRange::parse("2024-05-01", "2024-05-01", utc).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 5, 1, 23, 59, 59).unwrap() + Duration::milliseconds(500);
        assert!(range.contains(late));
        assert!(!range.contains(Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_out_of_range_offsets() {
        assert_eq!(offset_from_hours(1_000_000), Err(DateRangeError::InvalidOffset(1_000_000)));
        assert_eq!(offset_from_hours(-25), Err(DateRangeError::InvalidOffset(-25)));
        assert!(offset_from_hours(-12).is_ok());
    }
}
