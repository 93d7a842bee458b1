//! Utilities

pub mod config_store;
pub mod format;

pub use config_store::{load_app_config, save_app_config, try_load_app_config};
pub use format::format_time;
