//! LogState - Log Messages with Ring Buffer

use chrono::{DateTime, Local};

use crate::helpers::BoundedDeque;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
}

impl LogLevel {
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Debug => "DEBUG",
        }
    }
}

/// A single log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: u64,
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

/// Recent in-app messages; the newest one feeds the status bar
#[derive(Debug)]
pub struct LogState {
    entries: BoundedDeque<LogEntry>,
    next_id: u64,
}

impl LogState {
    /// Create a new log state with the specified capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: BoundedDeque::new(capacity),
            next_id: 1,
        }
    }

    /// Push a new log entry
    pub fn push(&mut self, level: LogLevel, message: impl Into<String>, timestamp: DateTime<Local>) {
        let entry = LogEntry {
            id: self.next_id,
            level,
            message: message.into(),
            timestamp,
        };
        self.next_id += 1;
        self.entries.push(entry);
    }

    /// Push a log entry with current timestamp
    pub fn push_now(&mut self, level: LogLevel, message: impl Into<String>) {
        self.push(level, message, Local::now());
    }

    /// Most recent entry
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Entries, newest first
    pub fn recent(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter_rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for LogState {
    fn default() -> Self {
        Self::new(crate::constants::LOG_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_and_capacity() {
        let mut logs = LogState::new(2);
        logs.push_now(LogLevel::Info, "one");
        logs.push_now(LogLevel::Warn, "two");
        logs.push_now(LogLevel::Error, "three");

        assert_eq!(logs.len(), 2);
        let latest = logs.latest().expect("latest entry");
        assert_eq!(latest.message, "three");
        assert_eq!(latest.id, 3);
        let messages: Vec<&str> = logs.recent().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["three", "two"]);
    }
}
