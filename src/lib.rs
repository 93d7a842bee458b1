//! Admin Dashboard Library
//!
//! A paginated, searchable, editable table of member records fetched from a
//! remote JSON endpoint. The table engine (`state::UserTable`), the services
//! and the export build without a window; the desktop shell sits behind the
//! `gui` feature.

pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod export;
pub mod helpers;
pub mod i18n;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(feature = "gui")]
pub mod app;
#[cfg(feature = "gui")]
pub mod components;
#[cfg(feature = "gui")]
pub mod features;
#[cfg(feature = "gui")]
pub mod theme;

pub use error::{Error, Result};
