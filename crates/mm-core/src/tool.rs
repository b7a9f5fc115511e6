//! Migration tool invocation
//!
//! The repair loop only ever talks to the external tool through the
//! [`MigrationTool`] trait, so tests can substitute a scripted backend that
//! returns canned [`CommandResult`]s. The production backend shells out to
//! the configured `manage.py`-style command.

use crate::config::Config;
use crate::error::{CoreError, CoreResult};
use crate::migration_id::MigrationId;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Outcome of one migration-tool invocation.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Process exit code (-1 if the child died to a signal)
    pub exit_code: i32,

    /// stdout and stderr merged, stdout first
    pub output: String,
}

impl CommandResult {
    /// Whether the invocation succeeded
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// The two migration-tool operations the repair loop drives.
///
/// Implementations must be Send + Sync for async operation.
#[async_trait]
pub trait MigrationTool: Send + Sync {
    /// Apply all pending migrations (`migrate`).
    async fn apply_all(&self) -> CoreResult<CommandResult>;

    /// Mark one migration as applied without running its body
    /// (`migrate <app> <name> --fake`).
    async fn fake_apply(&self, id: &MigrationId) -> CoreResult<CommandResult>;
}

/// Production backend that spawns the configured command as a subprocess.
///
/// The child inherits the full parent environment (database credentials are
/// assumed to live there), with any configured extras layered on top.
pub struct ManageTool {
    program: String,
    leading_args: Vec<String>,
    working_dir: PathBuf,
    extra_env: HashMap<String, String>,
}

impl ManageTool {
    /// Build a backend from loaded configuration, resolving the working
    /// directory against the project directory.
    pub fn from_config(config: &Config, project_dir: &Path) -> CoreResult<Self> {
        let mut parts = config.manage_command.iter();
        let program = parts
            .next()
            .cloned()
            .ok_or_else(|| CoreError::ConfigInvalid {
                message: "manage_command must not be empty".to_string(),
            })?;
        let leading_args = parts.cloned().collect();

        let working_dir = match &config.working_dir {
            Some(dir) => project_dir.join(dir),
            None => project_dir.to_path_buf(),
        };

        Ok(Self {
            program,
            leading_args,
            working_dir,
            extra_env: config.env.clone(),
        })
    }

    async fn run(&self, args: &[&str]) -> CoreResult<CommandResult> {
        log::debug!("running {} {:?} {:?}", self.program, self.leading_args, args);

        let output = Command::new(&self.program)
            .args(&self.leading_args)
            .args(args)
            .current_dir(&self.working_dir)
            .envs(&self.extra_env)
            .output()
            .await
            .map_err(|e| CoreError::ToolSpawn {
                command: self.program.clone(),
                source: e,
            })?;

        let mut text = String::from_utf8_lossy(&output.stdout).to_string();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(CommandResult {
            exit_code: output.status.code().unwrap_or(-1),
            output: text,
        })
    }
}

#[async_trait]
impl MigrationTool for ManageTool {
    async fn apply_all(&self) -> CoreResult<CommandResult> {
        self.run(&["migrate"]).await
    }

    async fn fake_apply(&self, id: &MigrationId) -> CoreResult<CommandResult> {
        self.run(&["migrate", &id.app, &id.name, "--fake"]).await
    }
}

#[cfg(all(test, unix))]
#[path = "tool_test.rs"]
mod tests;
