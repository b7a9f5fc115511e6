//! Command implementations

pub mod apply;
pub mod common;
pub mod fake;
pub mod repair;
