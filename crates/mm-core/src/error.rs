//! Error types for mm-core

use crate::migration_id::MigrationId;
use thiserror::Error;

/// Core error type for Migramend
#[derive(Error, Debug)]
pub enum CoreError {
    /// M001: Configuration file not found
    #[error("[M001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// M002: Invalid configuration value
    #[error("[M002] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// M003: Migration tool could not be spawned at all
    #[error("[M003] Failed to spawn migration tool '{command}': {source}")]
    ToolSpawn {
        command: String,
        source: std::io::Error,
    },

    /// M004: Apply failed and the output matched no known duplicate-object pattern
    #[error("[M004] Migration apply failed with an unexpected error (exit {exit_code})")]
    ApplyFailed { exit_code: i32, output: String },

    /// M005: Duplicate-object error, but no "Applying app.name" line to attribute it to
    #[error("[M005] Duplicate-object error but the offending migration could not be identified")]
    TargetNotFound { output: String },

    /// M006: Marking the offending migration as applied failed
    #[error("[M006] Failed to mark {id} as applied (exit {exit_code})")]
    FakeApplyFailed {
        id: MigrationId,
        exit_code: i32,
        output: String,
    },

    /// M007: The repair loop hit its attempt cap without converging
    #[error("[M007] Gave up after {attempts} apply attempts without converging")]
    AttemptsExhausted { attempts: usize },

    /// M008: IO error with file path context
    #[error("[M008] Failed to access '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// M009: YAML parse error
    #[error("[M009] Config parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// Process exit code this failure maps to.
    ///
    /// Tool failures propagate the tool's own code; a zero or negative code
    /// on a failure path is normalized to 1 so the process can never exit 0
    /// after a failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            CoreError::ApplyFailed { exit_code, .. }
            | CoreError::FakeApplyFailed { exit_code, .. } => {
                if *exit_code > 0 {
                    *exit_code
                } else {
                    1
                }
            }
            _ => 1,
        }
    }

    /// Raw tool output carried by this failure, if any.
    pub fn tool_output(&self) -> Option<&str> {
        match self {
            CoreError::ApplyFailed { output, .. }
            | CoreError::TargetNotFound { output }
            | CoreError::FakeApplyFailed { output, .. } => Some(output),
            _ => None,
        }
    }
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
