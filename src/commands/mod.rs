pub mod export;
pub mod fetch;
pub mod init;
pub mod report;

use crate::libs::{config::Config, messages::Message};
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

/// Date range selection; missing dates default to last month.
#[derive(Debug, Args)]
pub struct DateArgs {
    /// First day to include (YYYY-MM-DD, defaults to the first day of last month)
    #[arg(short, long)]
    start: Option<String>,

    /// Last day to include (YYYY-MM-DD, defaults to the last day of last month)
    #[arg(short, long)]
    end: Option<String>,
}

/// Where the daily log text comes from: a local transcript, or the channel
/// history for a date range.
#[derive(Debug, Args)]
pub struct LogSourceArgs {
    #[command(flatten)]
    range: DateArgs,

    /// Read a transcript file instead of retrieving messages
    #[arg(short, long, conflicts_with_all = ["start", "end"])]
    input: Option<PathBuf>,
}

impl LogSourceArgs {
    /// Loads the log text from the transcript file or the channel history.
    pub async fn load(&self, config: &Config) -> Result<String> {
        match &self.input {
            Some(path) => fs::read_to_string(path).map_err(|e| msg_error_anyhow!(format!("{}: {}", Message::InputReadFailed(path.display().to_string()), e))),
            None => fetch::collect_transcript(config, &self.range).await,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Write your messages for a date range to a text file")]
    Fetch(fetch::FetchArgs),
    #[command(about = "Prepare the hours report")]
    Report(report::ReportArgs),
    #[command(about = "Export daily hours to CSV, JSON or Excel")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Fetch(args) => fetch::cmd(args).await,
            Commands::Report(args) => report::cmd(args).await,
            Commands::Export(args) => export::cmd(args).await,
        }
    }
}
