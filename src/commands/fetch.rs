//! Message retrieval command.
//!
//! Writes the selected user's messages for a date range to a plain text
//! transcript, one block per message. The same transcript feeds the
//! `report` and `export` commands.

use super::DateArgs;
use crate::{
    api::{discord::DiscordClient, retrieve_user_messages},
    libs::{
        config::Config,
        date_range::{offset_from_hours, DateRange},
        messages::Message,
        transcript,
    },
    msg_bail_anyhow, msg_error_anyhow, msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct FetchArgs {
    #[command(flatten)]
    range: DateArgs,

    /// Transcript file (defaults to the configured one)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn cmd(args: FetchArgs) -> Result<()> {
    let config = Config::read()?;
    let text = collect_transcript(&config, &args.range).await?;

    let path = args.output.unwrap_or_else(|| PathBuf::from(config.report_settings().transcript_file));
    fs::write(&path, text)?;
    msg_success!(Message::TranscriptWritten(path.display().to_string()));
    Ok(())
}

/// Retrieves the configured user's messages for the range and renders them
/// as one transcript.
pub async fn collect_transcript(config: &Config, dates: &DateArgs) -> Result<String> {
    let Some(discord) = config.discord.as_ref() else {
        msg_bail_anyhow!(Message::DiscordNotConfigured);
    };
    let settings = config.report_settings();
    let offset = offset_from_hours(settings.utc_offset_hours)?;
    let range = DateRange::resolve(dates.start.as_deref(), dates.end.as_deref(), Local::now().date_naive(), offset)
        .map_err(|e| msg_error_anyhow!(Message::InvalidDateRange(e.to_string())))?;

    msg_info!(Message::DateRangeSelected(range.start.to_string(), range.end.to_string()));
    msg_info!(Message::RetrievingMessages(discord.channel_id.clone()));

    let client = DiscordClient::from_env(discord)?;
    let messages = retrieve_user_messages(&client, &discord.channel_id, &discord.user_id, &range).await?;

    if messages.is_empty() {
        msg_warning!(Message::NoMessagesFound);
    } else {
        msg_info!(Message::MessagesRetrieved(messages.len()));
    }

    Ok(transcript::render(&messages, range.offset()))
}
