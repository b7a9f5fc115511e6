//! Fake command implementation

use anyhow::Result;
use mm_core::MigrationId;

use crate::cli::{FakeArgs, GlobalArgs};
use crate::commands::common::ExitCode;
use crate::context::RuntimeContext;

/// Mark a single migration as applied without running it; the exit code
/// mirrors the migration tool's.
pub async fn execute(args: &FakeArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let id = MigrationId::new(&args.app, &args.name);

    let result = ctx.tool.fake_apply(&id).await?;
    print!("{}", result.output);

    if result.success() {
        println!("✓ Marked {id} as applied");
        Ok(())
    } else {
        eprintln!("✗ Failed to mark {id} as applied (exit {})", result.exit_code);
        Err(ExitCode(result.exit_code.max(1)).into())
    }
}
