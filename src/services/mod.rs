//! Service Layer
//!
//! Async work behind the member table: fetching the list and writing exports.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │               UserService                │
//! │  ┌──────────────┐   ┌─────────────────┐  │
//! │  │  UserSource  │   │  tokio runtime  │  │
//! │  │  (HTTP GET)  │   │  (background)   │  │
//! │  └──────────────┘   └─────────────────┘  │
//! └──────────────────────────────────────────┘
//!                     │
//!                     ▼ AppEvent (flume)
//! ┌──────────────────────────────────────────┐
//! │          UI event pump / UserTable        │
//! └──────────────────────────────────────────┘
//! ```

pub mod data_source;
pub mod runtime;
pub mod user_service;

pub use data_source::{HttpUserSource, StaticUserSource, UserSource};
pub use runtime::*;
pub use user_service::UserService;
