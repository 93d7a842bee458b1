//! Format - Formatting Utilities

use chrono::{DateTime, Local};

/// Format just the time portion
pub fn format_time(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S").to_string()
}
