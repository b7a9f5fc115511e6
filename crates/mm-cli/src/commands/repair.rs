//! Repair command implementation

use anyhow::Result;
use mm_core::{repair, RepairEvent, RepairOptions};
use std::path::Path;

use crate::cli::{GlobalArgs, RepairArgs};
use crate::commands::common::ExitCode;
use crate::context::RuntimeContext;

/// Execute the repair command: apply migrations, fake-marking any whose
/// schema objects the database already has, until the apply comes back clean.
pub async fn execute(args: &RepairArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;

    let options = RepairOptions {
        max_attempts: args.max_attempts.unwrap_or(ctx.config.max_attempts),
    };
    ctx.verbose(&format!(
        "manage command: {:?}, attempt cap: {}",
        ctx.config.manage_command, options.max_attempts
    ));

    println!("Repairing migration state...\n");

    let outcome = repair(ctx.tool.as_ref(), &options, |event| match event {
        RepairEvent::ApplyStarted { attempt } => {
            println!("Applying pending migrations (attempt {attempt})...");
        }
        RepairEvent::DuplicateDetected { id } => {
            println!("  ⚠ {id}: schema objects already exist");
        }
        RepairEvent::Faked { id } => {
            println!("  ✓ marked {id} as applied without running it\n");
        }
    })
    .await;

    match outcome {
        Ok(report) => {
            println!(
                "\n✓ All migrations applied ({} attempt(s), {} faked)",
                report.attempts,
                report.faked.len()
            );
            if let Some(path) = &args.report {
                report.save(Path::new(path))?;
                println!("Report written to {path}");
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("\n✗ {err}");
            if let Some(output) = err.tool_output() {
                eprintln!("\n{output}");
            }
            Err(ExitCode(err.exit_code()).into())
        }
    }
}
