//! # dailytally
//!
//! Turns daily-log chat messages into a categorized hours report.
//!
//! ## Features
//!
//! - **Message Retrieval**: Collects a user's messages from a channel over a date range
//! - **Log Parsing**: Aggregates `・【category】... (1.5h)` entries per day and category
//! - **Report Generation**: A dated table, a copy-paste table and a list of malformed entries
//! - **Data Export**: CSV, JSON and Excel exports of the per-day table
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dailytally::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
