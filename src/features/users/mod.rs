//! Users - The member table page

pub mod controller;
pub mod page;
