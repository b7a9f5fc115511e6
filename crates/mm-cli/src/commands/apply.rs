//! Apply command implementation

use anyhow::Result;

use crate::cli::{ApplyArgs, GlobalArgs};
use crate::commands::common::ExitCode;
use crate::context::RuntimeContext;

/// Execute a single apply pass with no healing; the exit code mirrors the
/// migration tool's.
pub async fn execute(_args: &ApplyArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;

    println!("Applying pending migrations...\n");

    let result = ctx.tool.apply_all().await?;
    print!("{}", result.output);

    if result.success() {
        println!("✓ Apply finished");
        Ok(())
    } else {
        eprintln!("✗ Apply failed (exit {})", result.exit_code);
        Err(ExitCode(result.exit_code.max(1)).into())
    }
}
