//! Hours report rendering and publishing.
//!
//! The report is a plain UTF-8 text file with three sections:
//!
//! 1. the dated table (date, nine categories, total, mark) for checking,
//! 2. the same rows without date, total and mark, ready to paste into a
//!    spreadsheet,
//! 3. the malformed entries, only when there are any.
//!
//! Publishing writes to a temporary file next to the destination and renames
//! it into place, so a reader never sees a half-written report. A new report
//! gets ordinary `0644` permissions on Unix; an existing one keeps its own.
//! Failures are logged and reported as `None`; they never abort the caller.

use crate::libs::category::Category;
use crate::libs::messages::Message;
use crate::libs::parser::{ParseResult, INVALID_MARK, VALID_MARK};
use crate::{msg_error, msg_success};
use anyhow::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Default report file name.
pub const REPORT_FILE_NAME: &str = "processed_output.txt";

const DATED_TITLE: &str = "===== 項目「日付」、「合計」を含むデータ（確認用） =====";
const DATELESS_TITLE: &str = "===== 項目「日付」、「合計」を含まないデータ（コピペ用） =====";
const ERRORS_TITLE: &str = "===== フォーマットに沿っていないタスク（修正用） =====";

fn legend() -> String {
    format!("備考が「{}」: OK ,  備考が「{}」: タスクのテキストに誤りがある", VALID_MARK, INVALID_MARK)
}

/// Renders the full report text.
pub fn render(result: &ParseResult) -> String {
    let mut out = String::new();

    out.push_str(DATED_TITLE);
    out.push('\n');
    out.push_str(&legend());
    out.push('\n');
    out.push_str(&format!("日付,{},合計,備考\n\n", Category::header()));
    for row in result.dated_table() {
        out.push_str(&row);
        out.push('\n');
    }

    out.push_str("\n\n");
    out.push_str(DATELESS_TITLE);
    out.push('\n');
    out.push_str(&Category::header());
    out.push_str("\n\n");
    for row in result.dateless_table() {
        out.push_str(&row);
        out.push('\n');
    }

    if !result.errors.is_empty() {
        out.push_str("\n\n");
        out.push_str(ERRORS_TITLE);
        out.push('\n');
        for error in &result.errors {
            out.push_str(&error.to_string());
            out.push('\n');
        }
    }

    out
}

pub struct ReportWriter {
    path: PathBuf,
}

impl ReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Renders and publishes the report.
    ///
    /// Returns the published path, or `None` if the report could not be
    /// written. The failure is logged, never propagated.
    pub fn write(&self, result: &ParseResult) -> Option<PathBuf> {
        match self.publish(&render(result)) {
            Ok(()) => {
                msg_success!(Message::ReportWritten(self.path.display().to_string()));
                Some(self.path.clone())
            }
            Err(e) => {
                tracing::error!(path = %self.path.display(), "report write failed: {:#}", e);
                msg_error!(Message::ReportWriteFailed(e.to_string()));
                None
            }
        }
    }

    /// Renders, publishes and reads the report back for delivery.
    pub fn write_and_read_back(&self, result: &ParseResult) -> Option<String> {
        let path = self.write(result)?;
        match fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) => {
                msg_error!(Message::ReportReadBackFailed(e.to_string()));
                None
            }
        }
    }

    fn publish(&self, content: &str) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let mut file = NamedTempFile::new_in(&dir)?;
        file.write_all(content.as_bytes())?;
        // Temp files are owner-only; the report keeps the destination's
        // permissions, or ordinary file permissions when it is new.
        fs::set_permissions(file.path(), self.publish_permissions(file.path())?)?;
        file.as_file().sync_all()?;
        file.persist(&self.path)?;
        Ok(())
    }

    fn publish_permissions(&self, temp: &Path) -> Result<fs::Permissions> {
        if let Ok(metadata) = fs::metadata(&self.path) {
            return Ok(metadata.permissions());
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let _ = temp;
            Ok(fs::Permissions::from_mode(0o644))
        }
        #[cfg(not(unix))]
        {
            Ok(fs::metadata(temp)?.permissions())
        }
    }
}
