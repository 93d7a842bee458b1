//! Composite Components

pub mod modal;
pub mod pagination;
