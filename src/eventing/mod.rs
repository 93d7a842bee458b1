//! Eventing - Service to UI messages

pub mod app_event;

pub use app_event::AppEvent;
