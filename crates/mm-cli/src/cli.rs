//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};

/// Migramend - self-healing wrapper around a Django-style migration tool
#[derive(Parser, Debug)]
#[command(name = "mm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply migrations, fake-marking any that the database already has
    Repair(RepairArgs),

    /// Apply pending migrations once, without healing
    Apply(ApplyArgs),

    /// Mark one migration as applied without running it
    Fake(FakeArgs),
}

/// Arguments for the repair command
#[derive(Args, Debug)]
pub struct RepairArgs {
    /// Override the configured apply-attempt cap
    #[arg(long)]
    pub max_attempts: Option<usize>,

    /// Write a JSON report of the run to this path
    #[arg(long)]
    pub report: Option<String>,
}

/// Arguments for the apply command
#[derive(Args, Debug)]
pub struct ApplyArgs {}

/// Arguments for the fake command
#[derive(Args, Debug)]
pub struct FakeArgs {
    /// Application label (e.g. shop)
    pub app: String,

    /// Migration name (e.g. 0003_create_order)
    pub name: String,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
