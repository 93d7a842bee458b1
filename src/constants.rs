//! Application Constants
//!
//! Centralized defaults and UI layout constants.

/// Application name used for directories and the config file
pub const APP_NAME: &str = "admin-dashboard";

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "admin-dashboard.toml";

/// Default member list endpoint
pub const DEFAULT_SOURCE_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

/// Rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// File stem of the exported spreadsheet
pub const DEFAULT_EXPORT_STEM: &str = "UserTable";

/// In-app log ring buffer capacity
pub const LOG_CAPACITY: usize = 500;

/// Status bar height
pub const STATUS_BAR_HEIGHT: f32 = 28.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 760.0;

/// Table layout
pub const TABLE_ROW_HEIGHT: f32 = 40.0;
pub const TABLE_HEADER_HEIGHT: f32 = 40.0;
pub const CHECKBOX_COLUMN_WIDTH: f32 = 48.0;
pub const ACTIONS_COLUMN_WIDTH: f32 = 140.0;
