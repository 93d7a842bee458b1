//! Primitive Components

pub mod button;
pub mod checkbox;
