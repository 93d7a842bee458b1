//! Helper Utilities
//!
//! Common utilities used across the application.

mod bounded;
mod fs;
mod logging;

pub use bounded::*;
pub use fs::*;
pub use logging::*;
