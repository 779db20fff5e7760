//! Hours report command.
//!
//! Parses the daily log (retrieved or from a transcript file), publishes the
//! text report, shows the per-day table and prints the published report.

use super::LogSourceArgs;
use crate::{
    libs::{config::Config, messages::Message, parser, report::ReportWriter, view::View},
    msg_bail_anyhow, msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    source: LogSourceArgs,

    /// Report file (defaults to the configured one)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only publish the report, do not print it
    #[arg(short, long)]
    quiet: bool,
}

pub async fn cmd(args: ReportArgs) -> Result<()> {
    let config = Config::read()?;
    let text = args.source.load(&config).await?;
    let result = parser::parse(&text);

    if result.days.is_empty() {
        msg_warning!(Message::NoDaysFound);
    }
    if !result.errors.is_empty() {
        msg_warning!(Message::MalformedEntriesFound(result.errors.len()));
    }

    let path = args.output.unwrap_or_else(|| PathBuf::from(config.report_settings().output_file));
    let Some(content) = ReportWriter::new(path).write_and_read_back(&result) else {
        msg_bail_anyhow!(Message::ReportNotProduced);
    };

    if !args.quiet {
        View::days(&result.days);
        if !result.errors.is_empty() {
            View::errors(&result.errors);
        }
        msg_print!(content, true);
    }

    Ok(())
}
