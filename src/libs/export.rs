//! Structured export of the per-day hours table.
//!
//! The text report is meant for people; the exports are meant for other
//! tools:
//!
//! - **CSV**: the dated table with a header row
//! - **JSON**: days with per-category hours plus the malformed entries
//! - **Excel**: a `Days` sheet and, when needed, an `Errors` sheet
//!
//! ```rust,no_run
//! use dailytally::libs::export::{ExportFormat, Exporter};
//! use dailytally::libs::parser::parse;
//!
//! let result = parse("2024-05-01\n・【保守】(1h)\n");
//! Exporter::new(ExportFormat::Csv, None).export(&result)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::category::Category;
use crate::libs::formatter::format_hours;
use crate::libs::messages::Message;
use crate::libs::parser::{ParseError, ParseResult, INVALID_MARK, VALID_MARK};
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

#[derive(Debug, Serialize)]
pub struct ExportDay {
    pub date: String,
    pub categories: Vec<ExportCategoryHours>,
    pub total: String,
    pub valid: bool,
}

#[derive(Debug, Serialize)]
pub struct ExportCategoryHours {
    pub category: &'static str,
    pub hours: f64,
    pub formatted: String,
}

#[derive(Debug, Serialize)]
pub struct ExportReport {
    pub days: Vec<ExportDay>,
    pub errors: Vec<ParseError>,
}

impl From<&ParseResult> for ExportReport {
    fn from(result: &ParseResult) -> Self {
        let days = result
            .days
            .iter()
            .map(|day| ExportDay {
                date: day.date.clone(),
                categories: Category::ALL
                    .iter()
                    .map(|&category| ExportCategoryHours {
                        category: category.label(),
                        hours: day.hours_for(category),
                        formatted: format_hours(day.hours_for(category)),
                    })
                    .collect(),
                total: format_hours(day.total()),
                valid: day.valid,
            })
            .collect();

        ExportReport {
            days,
            errors: result.errors.clone(),
        }
    }
}

fn mark(valid: bool) -> &'static str {
    if valid {
        VALID_MARK
    } else {
        INVALID_MARK
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("dailytally_export_{}", Local::now().format("%Y%m%d_%H%M%S"));

        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        };

        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export(&self, result: &ParseResult) -> Result<()> {
        let report = ExportReport::from(result);

        match self.format {
            ExportFormat::Csv => self.export_csv(&report)?,
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&report)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
            ExportFormat::Excel => self.export_excel(&report)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn header() -> Vec<&'static str> {
        let mut header = vec!["日付"];
        header.extend(Category::ALL.iter().map(|category| category.label()));
        header.extend(["合計", "備考"]);
        header
    }

    fn export_csv(&self, report: &ExportReport) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(Self::header())?;

        for day in &report.days {
            let mut record = vec![day.date.clone()];
            record.extend(day.categories.iter().map(|c| c.formatted.clone()));
            record.push(day.total.clone());
            record.push(mark(day.valid).to_string());
            wtr.write_record(&record)?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_excel(&self, report: &ExportReport) -> Result<()> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Days")?;
        for (col, title) in Self::header().iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
        }

        for (i, day) in report.days.iter().enumerate() {
            let row = i as u32 + 1;
            worksheet.write_string(row, 0, &day.date)?;
            for (j, category) in day.categories.iter().enumerate() {
                worksheet.write_string(row, j as u16 + 1, &category.formatted)?;
            }
            let total_col = day.categories.len() as u16 + 1;
            worksheet.write_string(row, total_col, &day.total)?;
            worksheet.write_string(row, total_col + 1, mark(day.valid))?;
        }
        worksheet.autofit();

        if !report.errors.is_empty() {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name("Errors")?;
            worksheet.write_string_with_format(0, 0, "Date", &header_format)?;
            worksheet.write_string_with_format(0, 1, "Line", &header_format)?;
            for (i, error) in report.errors.iter().enumerate() {
                let row = i as u32 + 1;
                worksheet.write_string(row, 0, &error.date)?;
                worksheet.write_string(row, 1, &error.line)?;
            }
            worksheet.autofit();
        }

        workbook.save(&self.output_path)?;
        Ok(())
    }
}
