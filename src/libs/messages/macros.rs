//! Convenient macros for application messaging and logging.
//!
//! The macros switch between structured logging and plain console output
//! depending on debug mode, so call sites never have to care which one is
//! active.
//!
//! ## Debug Mode Detection
//!
//! Debug mode is on when either variable is set:
//! - **`DAILYTALLY_DEBUG`**: application-specific flag
//! - **`RUST_LOG`**: standard Rust logging configuration
//!
//! The result is cached on first use.
//!
//! ## Macro Categories
//!
//! - **`msg_print!`**: plain message
//! - **`msg_success!`**, **`msg_info!`**, **`msg_warning!`**, **`msg_error!`**: prefixed messages
//! - **`msg_debug!`**: only emitted in debug mode
//! - **`msg_error_anyhow!`**, **`msg_bail_anyhow!`**: build or return an `anyhow::Error`
//!
//! ```rust
//! use dailytally::{msg_info, msg_error_anyhow};
//! use dailytally::libs::messages::Message;
//!
//! msg_info!(Message::NoMessagesFound);
//! let error = msg_error_anyhow!(Message::ReportNotProduced);
//! assert!(error.to_string().contains("No report"));
//! ```

use std::sync::OnceLock;

/// Cached debug mode flag.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Returns true when `DAILYTALLY_DEBUG` or `RUST_LOG` is set.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("DAILYTALLY_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a message without any prefix.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with a ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Prints an error message with a ❌ prefix to stderr.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

/// Prints a warning with a ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("\n⚠️ {}\n", $msg);
        } else {
            println!("\n⚠️ {}\n", $msg);
        }
    };
}

/// Prints an informational message with an ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Emits a debug message, only in debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Builds an `anyhow::Error` from a message.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

/// Returns early with an `anyhow::Error` built from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
