//! Core library modules for dailytally.
//!
//! ## Features
//!
//! - **Log Parsing**: Daily-log text to per-day category hours (`parser`, `category`, `formatter`)
//! - **Reporting**: Text report publishing, table view and structured export (`report`, `view`, `export`)
//! - **Retrieval Glue**: Date range selection and transcript building (`date_range`, `transcript`)
//! - **Infrastructure**: Configuration, data storage, messaging (`config`, `data_storage`, `messages`)
//!
//! ## Usage
//!
//! ```rust
//! use dailytally::libs::{parser, report};
//!
//! let result = parser::parse("2024-05-01\n・【保守】(1h)\n");
//! let text = report::render(&result);
//! assert!(text.contains("2024-05-01,01:00"));
//! ```

pub mod category;
pub mod config;
pub mod data_storage;
pub mod date_range;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod parser;
pub mod report;
pub mod transcript;
pub mod view;
