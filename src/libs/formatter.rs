//! Hour formatting for report tables.
//!
//! Daily logs record work as decimal hours (`1.5h`); reports show them as
//! `HH:MM`. Hours are zero-padded to at least two digits, minutes to exactly
//! two, and the value is rounded to the nearest minute on the total minute
//! count so `0.9999` becomes `01:00` rather than `00:60`.
//!
//! ```rust
//! use dailytally::libs::formatter::format_hours;
//!
//! assert_eq!(format_hours(2.5), "02:30");
//! assert_eq!(format_hours(0.25), "00:15");
//! assert_eq!(format_hours(123.0), "123:00");
//! ```

use crate::libs::messages::Message;
use thiserror::Error;

/// Shown in place of a value that could not be converted.
pub const FALLBACK_HOURS: &str = "00:00";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("hours value is not a finite number: {0}")]
    NotFinite(f64),
    #[error("hours value is negative: {0}")]
    Negative(f64),
}

/// Formats decimal hours as `HH:MM`, or fails on values no log can produce.
pub fn try_format_hours(hours: f64) -> Result<String, FormatError> {
    if !hours.is_finite() {
        return Err(FormatError::NotFinite(hours));
    }
    if hours < 0.0 {
        return Err(FormatError::Negative(hours));
    }

    let total_minutes = (hours * 60.0).round() as u64;
    Ok(format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60))
}

/// Formats decimal hours as `HH:MM`.
///
/// Never fails: an unconvertible value is logged and rendered as
/// [`FALLBACK_HOURS`].
pub fn format_hours(hours: f64) -> String {
    match try_format_hours(hours) {
        Ok(formatted) => formatted,
        Err(e) => {
            tracing::warn!("{}", Message::HourConversionFailed(e.to_string()));
            FALLBACK_HOURS.to_string()
        }
    }
}
