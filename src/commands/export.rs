//! Structured export command.
//!
//! Writes the per-day hours table as CSV, JSON or Excel for use in other
//! tools.

use super::LogSourceArgs;
use crate::{
    libs::{
        config::Config,
        export::{ExportFormat, Exporter},
        messages::Message,
        parser,
    },
    msg_info,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    source: LogSourceArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file (defaults to a timestamped name)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let text = args.source.load(&config).await?;
    let result = parser::parse(&text);

    msg_info!(Message::ExportingData(format!("{:?}", args.format)));
    Exporter::new(args.format, args.output).export(&result)
}
