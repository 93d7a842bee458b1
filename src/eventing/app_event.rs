//! AppEvent - Application Event Enum
//!
//! All events that can be sent from services to the UI layer.

use std::path::PathBuf;

use chrono::{DateTime, Local};

use crate::domain::user::UserRecord;
use crate::state::log_state::LogLevel;

/// Application events for service -> UI communication
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Log message
    Log {
        level: LogLevel,
        message: String,
        timestamp: DateTime<Local>,
    },

    /// Member list fetched
    UsersLoaded { users: Vec<UserRecord> },

    /// Member list fetch failed
    UsersLoadFailed { message: String },

    /// Export written to disk
    ExportFinished { path: PathBuf },

    /// Export could not be written
    ExportFailed { message: String },
}

impl AppEvent {
    /// Create a log event with current timestamp
    pub fn log(level: LogLevel, message: impl Into<String>) -> Self {
        Self::Log {
            level,
            message: message.into(),
            timestamp: Local::now(),
        }
    }

    /// Create an info log event
    pub fn info(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Info, message)
    }

    /// Create a warning log event
    pub fn warn(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Warn, message)
    }

    /// Create an error log event
    pub fn error(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Error, message)
    }
}
