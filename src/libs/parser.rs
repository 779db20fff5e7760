//! Daily log parsing and hour aggregation.
//!
//! A log is free-form text split into per-day sections. Any line containing
//! a `YYYY-MM-DD` date opens a new section; inside a section, task entries
//! look like
//!
//! ```text
//! ・【保守】fix login timeout (1.5h)
//! ```
//!
//! and credit their hours to the bracketed category. Several entries may
//! share one line. Entries with an unknown category, and lines that carry the
//! `・【` marker without a complete entry, are collected as [`ParseError`]s
//! and flag their day as invalid. Everything else is ignored.
//!
//! Parsing is a pure fold over lines: no I/O, no shared state, and it always
//! completes.
//!
//! ```rust
//! use dailytally::libs::parser::parse;
//!
//! let result = parse("2024-05-01\n・【保守】deploy (2.5h)\n");
//! assert_eq!(result.dateless_table(), vec!["02:30,00:00,00:00,00:00,00:00,00:00,00:00,00:00,00:00"]);
//! assert!(result.errors.is_empty());
//! ```

use crate::libs::category::{Category, CATEGORY_COUNT};
use crate::libs::formatter::format_hours;
use crate::msg_debug;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

/// Marks a day without malformed entries.
pub const VALID_MARK: &str = "〇";
/// Marks a day with at least one malformed entry.
pub const INVALID_MARK: &str = "☓";
/// Prefix shared by every task entry.
pub const TASK_MARKER: &str = "・【";

static DATE_PATTERN: OnceLock<Regex> = OnceLock::new();
static TASK_PATTERN: OnceLock<Regex> = OnceLock::new();

fn date_pattern() -> &'static Regex {
    DATE_PATTERN.get_or_init(|| Regex::new(r"([0-9]{4}-[0-9]{2}-[0-9]{2})").expect("date pattern is valid"))
}

fn task_pattern() -> &'static Regex {
    TASK_PATTERN.get_or_init(|| Regex::new(r"・【(.*?)】.*?\(([0-9]+\.?[0-9]*)h\)").expect("task pattern is valid"))
}

/// One day's worth of logged work.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRecord {
    /// The `YYYY-MM-DD` string as it appeared in the log.
    pub date: String,
    /// Hours per category, indexed by [`Category::index`].
    pub hours: [f64; CATEGORY_COUNT],
    pub valid: bool,
}

impl DayRecord {
    pub fn new(date: &str) -> Self {
        DayRecord {
            date: date.to_string(),
            hours: [0.0; CATEGORY_COUNT],
            valid: true,
        }
    }

    pub fn hours_for(&self, category: Category) -> f64 {
        self.hours[category.index()]
    }

    pub fn total(&self) -> f64 {
        self.hours.iter().sum()
    }

    pub fn mark(&self) -> &'static str {
        if self.valid {
            VALID_MARK
        } else {
            INVALID_MARK
        }
    }

    /// `HH:MM` per category, in column order.
    pub fn formatted_hours(&self) -> Vec<String> {
        self.hours.iter().map(|&hours| format_hours(hours)).collect()
    }

    /// `date,h0,...,h8,total,mark`
    pub fn dated_row(&self) -> String {
        format!("{},{},{},{}", self.date, self.dateless_row(), format_hours(self.total()), self.mark())
    }

    /// `h0,...,h8`
    pub fn dateless_row(&self) -> String {
        self.formatted_hours().join(",")
    }

    fn credit(&mut self, category: Category, hours: f64) {
        self.hours[category.index()] += hours;
    }
}

/// A task line that could not be credited to its day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseError {
    pub date: String,
    pub line: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} : {}", self.date, self.line)
    }
}

/// Finalized days, in the order their sections were opened, plus every
/// malformed entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseResult {
    pub days: Vec<DayRecord>,
    pub errors: Vec<ParseError>,
}

impl ParseResult {
    /// Rows with date, total and mark.
    pub fn dated_table(&self) -> Vec<String> {
        self.days.iter().map(DayRecord::dated_row).collect()
    }

    /// Rows with category hours only, one-to-one with [`Self::dated_table`].
    pub fn dateless_table(&self) -> Vec<String> {
        self.days.iter().map(DayRecord::dateless_row).collect()
    }
}

/// Scan state threaded through the fold.
#[derive(Default)]
struct Scan {
    current: Option<DayRecord>,
    result: ParseResult,
}

impl Scan {
    fn step(mut self, line: &str) -> Self {
        if let Some(found) = date_pattern().find(line) {
            self.flush();
            self.current = Some(DayRecord::new(found.as_str()));
        }

        // Entries before the first date have nowhere to go.
        let Some(day) = self.current.as_mut() else {
            return self;
        };

        let mut matched = false;
        for captures in task_pattern().captures_iter(line) {
            matched = true;
            let label = &captures[1];
            let credited = match (Category::from_label(label), captures[2].parse::<f64>()) {
                (Some(category), Ok(hours)) => {
                    day.credit(category, hours);
                    true
                }
                _ => false,
            };
            if !credited {
                msg_debug!(format!("rejected task entry [{}] on {}", label, day.date));
                day.valid = false;
                self.result.errors.push(ParseError {
                    date: day.date.clone(),
                    line: line.to_string(),
                });
            }
        }

        if !matched && line.contains(TASK_MARKER) {
            day.valid = false;
            self.result.errors.push(ParseError {
                date: day.date.clone(),
                line: line.to_string(),
            });
        }

        self
    }

    fn flush(&mut self) {
        if let Some(day) = self.current.take() {
            self.result.days.push(day);
        }
    }

    fn finish(mut self) -> ParseResult {
        self.flush();
        self.result
    }
}

/// Parses a whole daily log.
pub fn parse(text: &str) -> ParseResult {
    text.lines().fold(Scan::default(), Scan::step).finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO_ROW: &str = "00:00,00:00,00:00,00:00,00:00,00:00,00:00,00:00,00:00";

    #[test]
    fn no_date_headers_yields_nothing() {
        let result = parse("・【保守】orphan (1h)\n・【保守】broken\nhello\n");
        assert!(result.days.is_empty());
        assert!(result.errors.is_empty());
        assert!(result.dated_table().is_empty());
    }

    #[test]
    fn single_entry_is_credited() {
        let result = parse("2024-05-01\n・【保守】work (2.5h)\n");
        assert_eq!(
            result.dated_table(),
            vec!["2024-05-01,02:30,00:00,00:00,00:00,00:00,00:00,00:00,00:00,00:00,02:30,〇"]
        );
        assert_eq!(result.days[0].hours_for(Category::Maintenance), 2.5);
    }

    #[test]
    fn multiple_entries_on_one_line() {
        let result = parse("2024-05-01\n・【保守】(2h) ・【機能開発】(1h)\n");
        let day = &result.days[0];
        assert_eq!(day.hours_for(Category::Maintenance), 2.0);
        assert_eq!(day.hours_for(Category::FeatureDevelopment), 1.0);
        assert_eq!(day.total(), 3.0);
        assert!(day.valid);
    }

    #[test]
    fn unknown_category_is_reported() {
        let result = parse("2024-05-01\n・【保守】ok (1h)\n・【存在しない】(1h)\n");
        assert_eq!(
            result.errors,
            vec![ParseError {
                date: "2024-05-01".to_string(),
                line: "・【存在しない】(1h)".to_string(),
            }]
        );
        assert_eq!(result.days[0].mark(), INVALID_MARK);
        assert_eq!(result.days[0].hours_for(Category::Maintenance), 1.0);
    }

    #[test]
    fn marker_without_hours_is_malformed() {
        let result = parse("2024-05-01\n・【保守】forgot the hours\n");
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].to_string(), "2024-05-01 : ・【保守】forgot the hours");
        assert_eq!(result.dateless_table(), vec![ZERO_ROW]);
        assert!(!result.days[0].valid);
    }

    #[test]
    fn consecutive_headers_flush_empty_day() {
        let result = parse("2024-05-01\n2024-05-02\n・【その他】(0.5h)\n");
        assert_eq!(result.days.len(), 2);
        assert_eq!(result.days[0].dateless_row(), ZERO_ROW);
        assert_eq!(result.days[1].hours_for(Category::Other), 0.5);
    }

    #[test]
    fn accumulation_follows_category_order() {
        let result = parse("2024-05-01\n・【その他】(1h)\n・【保守】(0.25h)\n・【その他】(1h)\n");
        assert_eq!(result.dateless_table(), vec!["00:15,00:00,00:00,00:00,00:00,00:00,00:00,00:00,02:00"]);
    }

    #[test]
    fn sections_keep_input_order() {
        let result = parse("2024-05-03\n・【NHK】(1h)\n2024-05-01\n・【海外】(1h)\n");
        let dates: Vec<_> = result.days.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-05-03", "2024-05-01"]);
        assert_eq!(result.dated_table().len(), result.dateless_table().len());
    }

    #[test]
    fn date_inside_framing_line_opens_section() {
        let result = parse("alice: 2024-05-01 18:00:00\n・【アプリ】release (3h)\n\n");
        assert_eq!(result.days[0].date, "2024-05-01");
        assert_eq!(result.days[0].hours_for(Category::App), 3.0);
    }

    #[test]
    fn trailing_text_after_valid_entry_is_accepted() {
        let result = parse("2024-05-01\n・【脆弱性】patch (1h) and then ・【 garbage\n");
        assert!(result.errors.is_empty());
        assert_eq!(result.days[0].hours_for(Category::Vulnerability), 1.0);
    }

    #[test]
    fn parsing_is_idempotent() {
        let text = "2024-05-01\n・【保守】(1h)\n・【謎】(2h)\n2024-05-02\n・【ISMAP】(1.25h)\n";
        assert_eq!(parse(text), parse(text));
    }
}
