//! Discord REST client for reading channel history.
//!
//! Only one endpoint is used:
//! `GET {api_url}/channels/{channel_id}/messages?after={snowflake}&limit={n}`,
//! authorized with the bot token.

use super::{ChannelMessage, MessageSource};
use crate::libs::config::{ConfigModule, DiscordConfig};
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{DateTime, Utc};
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::Deserialize;

/// Environment variable holding the bot token.
pub const TOKEN_ENV: &str = "DAILYTALLY_BOT_TOKEN";

#[derive(Debug)]
pub struct DiscordClient {
    client: Client,
    api_url: String,
    token: String,
}

#[derive(Debug, Deserialize)]
struct RawMessage {
    id: String,
    content: String,
    timestamp: String,
    author: RawAuthor,
}

#[derive(Debug, Deserialize)]
struct RawAuthor {
    id: String,
    username: String,
}

impl RawMessage {
    fn into_message(self) -> Result<ChannelMessage> {
        let id = self
            .id
            .parse::<u64>()
            .map_err(|e| msg_error_anyhow!(Message::HistoryParseFailed(format!("message id {}: {}", self.id, e))))?;
        let created_at = DateTime::parse_from_rfc3339(&self.timestamp)
            .map_err(|e| msg_error_anyhow!(Message::HistoryParseFailed(format!("timestamp {}: {}", self.timestamp, e))))?
            .with_timezone(&Utc);

        Ok(ChannelMessage {
            id,
            author_id: self.author.id,
            author_name: self.author.username,
            created_at,
            content: self.content,
        })
    }
}

/// Parses one history page as returned by the API.
pub fn parse_page(body: &str) -> Result<Vec<ChannelMessage>> {
    let raw: Vec<RawMessage> = serde_json::from_str(body).map_err(|e| msg_error_anyhow!(Message::HistoryParseFailed(e.to_string())))?;
    raw.into_iter().map(RawMessage::into_message).collect()
}

impl DiscordClient {
    pub fn new(config: &DiscordConfig, token: &str) -> Self {
        Self {
            client: Client::new(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// Builds a client with the token from [`TOKEN_ENV`].
    pub fn from_env(config: &DiscordConfig) -> Result<Self> {
        let token = std::env::var(TOKEN_ENV).map_err(|_| msg_error_anyhow!(Message::BotTokenMissing(TOKEN_ENV.to_string())))?;
        Ok(Self::new(config, &token))
    }
}

impl MessageSource for DiscordClient {
    async fn fetch_page(&self, channel_id: &str, after: u64, limit: usize) -> Result<Vec<ChannelMessage>> {
        let url = format!("{}/channels/{}/messages", self.api_url, channel_id);
        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, format!("Bot {}", self.token))
            .query(&[("after", after.to_string()), ("limit", limit.to_string())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(msg_error_anyhow!(Message::HistoryRequestFailed(status.to_string())));
        }

        parse_page(&response.text().await?)
    }
}

impl DiscordConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "discord".to_string(),
            name: "Discord".to_string(),
        }
    }
}
