//! Message retrieval from the chat platform.
//!
//! The report pipeline only needs one thing from the platform: the messages a
//! given user posted to a channel within a date range, oldest first. This
//! module defines that boundary as the [`MessageSource`] trait (one page of
//! channel history at a time) and implements the paging, filtering and
//! ordering on top of it in [`retrieve_user_messages`].
//!
//! History is paged by snowflake: time-ordered 64-bit message ids whose upper
//! bits hold milliseconds since the platform epoch, so "messages after an
//! instant" is "messages after the snowflake of that instant".
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dailytally::api::{discord::DiscordClient, retrieve_user_messages};
//! use dailytally::libs::config::DiscordConfig;
//! use dailytally::libs::date_range::{offset_from_hours, DateRange};
//!
//! # async fn run(config: DiscordConfig) -> anyhow::Result<()> {
//! let client = DiscordClient::new(&config, "bot-token");
//! let range = DateRange::parse("2024-05-01", "2024-05-31", offset_from_hours(9)?)?;
//! let messages = retrieve_user_messages(&client, &config.channel_id, &config.user_id, &range).await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::date_range::DateRange;
use crate::msg_debug;
use anyhow::Result;
use chrono::{DateTime, Utc};
use std::collections::HashSet;

pub mod discord;

/// Milliseconds between the Unix epoch and the platform epoch (2015-01-01).
pub const SNOWFLAKE_EPOCH_MS: i64 = 1_420_070_400_000;
/// Largest page the history endpoint returns.
pub const PAGE_LIMIT: usize = 100;

/// One message as seen by the report pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelMessage {
    pub id: u64,
    pub author_id: String,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
    pub content: String,
}

/// Lowest snowflake that can belong to a message created at `instant`.
pub fn time_snowflake(instant: DateTime<Utc>) -> u64 {
    let ms = (instant.timestamp_millis() - SNOWFLAKE_EPOCH_MS).max(0) as u64;
    ms << 22
}

/// Creation instant encoded in a snowflake.
pub fn snowflake_time(id: u64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis((id >> 22) as i64 + SNOWFLAKE_EPOCH_MS)
}

/// A paged view of channel history.
#[allow(async_fn_in_trait)]
pub trait MessageSource {
    /// Returns up to `limit` messages of `channel_id` with ids greater than
    /// `after`, in any order.
    async fn fetch_page(&self, channel_id: &str, after: u64, limit: usize) -> Result<Vec<ChannelMessage>>;
}

/// Collects the messages `user_id` posted to `channel_id` within `range`.
///
/// Pages forward from the start of the range until the source runs dry or a
/// page reaches past the end of the range. The result is sorted by creation
/// time; ties keep retrieval order.
pub async fn retrieve_user_messages<S: MessageSource>(source: &S, channel_id: &str, user_id: &str, range: &DateRange) -> Result<Vec<ChannelMessage>> {
    let end = range.end_instant();
    let mut after = time_snowflake(range.start_instant());
    let mut seen = HashSet::new();
    let mut messages = Vec::new();

    loop {
        let page = source.fetch_page(channel_id, after, PAGE_LIMIT).await?;
        msg_debug!(format!("history page after {}: {} message(s)", after, page.len()));

        let Some(newest) = page.iter().map(|message| message.id).max() else {
            break;
        };
        let page_len = page.len();
        let reached_end = page.iter().any(|message| message.created_at > end);

        for message in page {
            if message.author_id == user_id && range.contains(message.created_at) && seen.insert(message.id) {
                messages.push(message);
            }
        }

        // A page that does not advance would loop forever.
        if reached_end || page_len < PAGE_LIMIT || newest <= after {
            break;
        }
        after = newest;
    }

    messages.sort_by_key(|message| message.created_at);
    tracing::debug!(channel_id, user_id, count = messages.len(), "retrieved user messages");
    Ok(messages)
}
