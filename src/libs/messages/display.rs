//! Display implementation for dailytally application messages.
//!
//! All user-facing text lives in this one `match`, so every message variant
//! has exactly one rendering. Messages with parameters interpolate them here
//! and nowhere else.
//!
//! ```rust
//! use dailytally::libs::messages::Message;
//!
//! let message = Message::MessagesRetrieved(3);
//! assert_eq!(message.to_string(), "Retrieved 3 message(s)");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleDiscord => "Discord settings".to_string(),
            Message::ConfigModuleReport => "Report settings".to_string(),
            Message::DiscordNotConfigured => "Discord is not configured. Run 'dailytally init' first.".to_string(),
            Message::BotTokenMissing(var) => format!("Bot token not set! Export {} or put it in a .env file.", var),

            // === DATE RANGE MESSAGES ===
            Message::DateRangeSelected(start, end) => format!("Start Date: {}, End Date: {}", start, end),
            Message::InvalidDateRange(error) => format!("Invalid date range: {}", error),

            // === RETRIEVAL MESSAGES ===
            Message::RetrievingMessages(channel) => format!("Retrieving messages from channel {}...", channel),
            Message::MessagesRetrieved(count) => format!("Retrieved {} message(s)", count),
            Message::NoMessagesFound => "No messages found in the selected range.".to_string(),
            Message::HistoryRequestFailed(status) => format!("Failed to read channel history. Status: {}", status),
            Message::HistoryParseFailed(error) => format!("Failed to parse channel history response: {}", error),
            Message::TranscriptWritten(path) => format!("Messages written to {}", path),

            // === REPORT MESSAGES ===
            Message::ReportWritten(path) => format!("Report written to {}", path),
            Message::ReportWriteFailed(error) => format!("Failed to write report: {}", error),
            Message::ReportNotProduced => "No report could be produced.".to_string(),
            Message::ReportReadBackFailed(error) => format!("Failed to read the report back: {}", error),
            Message::NoDaysFound => "No dated sections found in the log.".to_string(),
            Message::MalformedEntriesFound(1) => "1 task entry does not follow the log format".to_string(),
            Message::MalformedEntriesFound(count) => format!("{} task entries do not follow the log format", count),
            Message::HourConversionFailed(error) => format!("Failed to convert hours: {}", error),

            // === EXPORT MESSAGES ===
            Message::ExportingData(format) => format!("Exporting daily hours in {} format...", format),
            Message::ExportCompleted(path) => format!("Export completed successfully: {}", path),

            // === FILE SYSTEM MESSAGES ===
            Message::InputReadFailed(path) => format!("Failed to read input file {}", path),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select nodes to configure".to_string(),
            Message::PromptDiscordApiUrl => "Enter the Discord API URL".to_string(),
            Message::PromptDiscordChannelId => "Enter the channel ID holding the daily logs".to_string(),
            Message::PromptDiscordUserId => "Enter your user ID".to_string(),
            Message::PromptReportOutputFile => "Enter the report file name".to_string(),
            Message::PromptTranscriptFile => "Enter the messages file name".to_string(),
            Message::PromptUtcOffset => "Enter the UTC offset for timestamps (hours)".to_string(),
        };

        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_entry_count_is_pluralized() {
        assert_eq!(Message::MalformedEntriesFound(1).to_string(), "1 task entry does not follow the log format");
        assert_eq!(Message::MalformedEntriesFound(3).to_string(), "3 task entries do not follow the log format");
    }
}
