//! Configuration management for dailytally.
//!
//! Settings live in `config.json` inside the platform data directory:
//! - **Windows**: `%LOCALAPPDATA%\dailytally\config.json`
//! - **macOS**: `~/Library/Application Support/dailytally/config.json`
//! - **Linux**: `~/.local/share/dailytally/config.json`
//!
//! Every section is optional. A missing file means defaults, so the tool can
//! parse local transcripts without any setup. The bot token is never stored
//! here; it comes from the environment (see [`crate::api::discord::TOKEN_ENV`]).
//!
//! ```rust,no_run
//! use dailytally::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("report file: {}", config.report_settings().output_file);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::report::REPORT_FILE_NAME;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const TRANSCRIPT_FILE_NAME: &str = "messages.txt";
pub const DEFAULT_API_URL: &str = "https://discord.com/api/v10";
/// Timestamps are shown in JST unless configured otherwise.
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 9;

/// A configurable section, as listed by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Where the daily logs are posted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DiscordConfig {
    /// Base URL of the REST API, without trailing slash.
    pub api_url: String,
    /// Channel whose history holds the daily logs.
    pub channel_id: String,
    /// Author whose messages are collected.
    pub user_id: String,
}

/// Report output settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReportConfig {
    pub output_file: String,
    pub transcript_file: String,
    /// Offset applied to message timestamps and date range bounds.
    pub utc_offset_hours: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord: Option<DiscordConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportConfig>,
}

impl Default for DiscordConfig {
    fn default() -> Self {
        DiscordConfig {
            api_url: DEFAULT_API_URL.to_string(),
            channel_id: String::new(),
            user_id: String::new(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            output_file: REPORT_FILE_NAME.to_string(),
            transcript_file: TRANSCRIPT_FILE_NAME.to_string(),
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
        }
    }
}

impl ReportConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "report".to_string(),
            name: "Report".to_string(),
        }
    }
}

impl Config {
    /// Loads the configuration, or defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Report settings, falling back to defaults.
    pub fn report_settings(&self) -> ReportConfig {
        self.report.clone().unwrap_or_default()
    }

    /// Interactive setup wizard. Existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [DiscordConfig::module(), ReportConfig::module()];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "discord" => {
                    let default = config.discord.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleDiscord);
                    config.discord = Some(DiscordConfig {
                        api_url: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDiscordApiUrl.to_string())
                            .default(default.api_url)
                            .interact_text()?,
                        channel_id: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDiscordChannelId.to_string())
                            .default(default.channel_id)
                            .interact_text()?,
                        user_id: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDiscordUserId.to_string())
                            .default(default.user_id)
                            .interact_text()?,
                    });
                }
                "report" => {
                    let default = config.report_settings();
                    msg_print!(Message::ConfigModuleReport);
                    config.report = Some(ReportConfig {
                        output_file: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptReportOutputFile.to_string())
                            .default(default.output_file)
                            .interact_text()?,
                        transcript_file: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptTranscriptFile.to_string())
                            .default(default.transcript_file)
                            .interact_text()?,
                        utc_offset_hours: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptUtcOffset.to_string())
                            .default(default.utc_offset_hours)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
