//! The fake-apply repair loop
//!
//! When the database already contains the schema a migration would create
//! (restored dump, schema synced by other means), applying migrations fails
//! with a duplicate-object error even though nothing is actually wrong. This
//! loop re-runs the apply, attributes each duplicate-object failure to the
//! migration the tool was working on, marks that migration as applied
//! without running it, and retries. One repaired migration can unmask the
//! next out-of-sync one, so a single fix-and-exit pass is not enough.
//!
//! Every retry is conditioned on a successful, targeted fake-apply; nothing
//! is retried blindly. Failures that do not match a known duplicate-object
//! phrasing stop the loop immediately with the tool's output intact.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

use crate::classify::{classify, extract_target, Classification};
use crate::error::{CoreError, CoreResult};
use crate::migration_id::MigrationId;
use crate::tool::MigrationTool;

/// Tunables for the repair loop.
#[derive(Debug, Clone)]
pub struct RepairOptions {
    /// Upper bound on apply attempts before giving up.
    ///
    /// Each attempt fake-marks at most one migration, so any value at or
    /// above the project's migration count is enough for the loop to
    /// converge on a healthy database.
    pub max_attempts: usize,
}

impl Default for RepairOptions {
    fn default() -> Self {
        Self { max_attempts: 50 }
    }
}

/// Progress notifications emitted while the loop runs.
///
/// The loop itself never prints; the caller decides how to surface these.
#[derive(Debug, Clone)]
pub enum RepairEvent {
    /// An apply pass is starting (1-based attempt number)
    ApplyStarted { attempt: usize },

    /// Apply tripped over a migration whose schema objects already exist
    DuplicateDetected { id: MigrationId },

    /// The migration was marked applied without running its body
    Faked { id: MigrationId },
}

/// Record of a converged repair run.
#[derive(Debug, Clone, Serialize)]
pub struct RepairReport {
    /// When the repair run started
    pub started_at: DateTime<Utc>,

    /// When the final apply pass came back clean
    pub finished_at: DateTime<Utc>,

    /// Number of apply passes, including the final clean one
    pub attempts: usize,

    /// Migrations fake-marked, in the order the tool tripped over them
    pub faked: Vec<MigrationId>,
}

impl RepairReport {
    /// Write the report as pretty-printed JSON
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(())
    }
}

/// Drive apply and fake-apply until the migration ledger converges.
///
/// Returns a [`RepairReport`] once an apply pass exits cleanly. Every
/// failure path carries the tool's raw output (where there is any) so the
/// caller can surface it verbatim; see [`CoreError::tool_output`].
pub async fn repair<T, F>(
    tool: &T,
    options: &RepairOptions,
    mut on_event: F,
) -> CoreResult<RepairReport>
where
    T: MigrationTool + ?Sized,
    F: FnMut(&RepairEvent),
{
    let started_at = Utc::now();
    let mut faked: Vec<MigrationId> = Vec::new();

    for attempt in 1..=options.max_attempts {
        on_event(&RepairEvent::ApplyStarted { attempt });

        let result = tool.apply_all().await?;
        if result.success() {
            return Ok(RepairReport {
                started_at,
                finished_at: Utc::now(),
                attempts: attempt,
                faked,
            });
        }

        if classify(&result.output) != Classification::DuplicateObject {
            return Err(CoreError::ApplyFailed {
                exit_code: result.exit_code,
                output: result.output,
            });
        }

        // Duplicate-object error, but fake-applying without a concrete
        // target would be guesswork.
        let Some(id) = extract_target(&result.output) else {
            return Err(CoreError::TargetNotFound {
                output: result.output,
            });
        };

        on_event(&RepairEvent::DuplicateDetected { id: id.clone() });
        log::debug!("duplicate-object error attributed to {id}");

        let fake = tool.fake_apply(&id).await?;
        if !fake.success() {
            return Err(CoreError::FakeApplyFailed {
                id,
                exit_code: fake.exit_code,
                output: fake.output,
            });
        }

        on_event(&RepairEvent::Faked { id: id.clone() });
        faked.push(id);
    }

    Err(CoreError::AttemptsExhausted {
        attempts: options.max_attempts,
    })
}

#[cfg(test)]
#[path = "repair_test.rs"]
mod tests;
