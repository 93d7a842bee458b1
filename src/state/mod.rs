//! State - Table and Session State
//!
//! Plain Rust state with no GPUI dependency. The GUI wraps these in entities;
//! tests drive them directly.

pub mod confirm;
pub mod edit;
pub mod filter;
pub mod i18n_state;
pub mod load_state;
pub mod log_state;
pub mod pagination;
pub mod selection;
pub mod user_table;

pub use confirm::{Answered, Confirm, DeletePrompt};
pub use i18n_state::I18nState;
pub use load_state::LoadState;
pub use log_state::{LogEntry, LogLevel, LogState};
pub use user_table::{EditToggle, UserTable, ViewRow, ViewSlice};
