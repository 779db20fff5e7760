#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleDiscord,
    ConfigModuleReport,
    DiscordNotConfigured,
    BotTokenMissing(String), // env var name

    // === DATE RANGE MESSAGES ===
    DateRangeSelected(String, String), // start, end
    InvalidDateRange(String),          // error

    // === RETRIEVAL MESSAGES ===
    RetrievingMessages(String), // channel id
    MessagesRetrieved(usize),   // count
    NoMessagesFound,
    HistoryRequestFailed(String), // status
    HistoryParseFailed(String),   // error
    TranscriptWritten(String),    // path

    // === REPORT MESSAGES ===
    ReportWritten(String),      // path
    ReportWriteFailed(String),  // error
    ReportNotProduced,
    ReportReadBackFailed(String), // error
    NoDaysFound,
    MalformedEntriesFound(usize), // count
    HourConversionFailed(String), // error

    // === EXPORT MESSAGES ===
    ExportingData(String),  // format
    ExportCompleted(String), // path

    // === FILE SYSTEM MESSAGES ===
    InputReadFailed(String), // path

    // === PROMPTS ===
    PromptSelectModules,
    PromptDiscordApiUrl,
    PromptDiscordChannelId,
    PromptDiscordUserId,
    PromptReportOutputFile,
    PromptTranscriptFile,
    PromptUtcOffset,
}
