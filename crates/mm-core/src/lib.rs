//! mm-core - Core library for Migramend
//!
//! This crate provides the pieces the `mm` binary is built from: migration
//! identity, failure classification for the migration tool's output, the
//! subprocess backend that invokes the tool, and the fake-apply repair loop
//! that drives the ledger back in sync with the database.

pub mod classify;
pub mod config;
pub mod error;
pub mod migration_id;
pub mod repair;
pub mod tool;

pub use classify::{classify, extract_target, Classification};
pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use migration_id::MigrationId;
pub use repair::{repair, RepairEvent, RepairOptions, RepairReport};
pub use tool::{CommandResult, ManageTool, MigrationTool};
