//! Runtime context for CLI commands

use anyhow::{Context, Result};
use mm_core::{Config, ManageTool, MigrationTool};
use std::path::Path;
use std::sync::Arc;

use crate::cli::GlobalArgs;

/// Runtime context containing the loaded configuration and tool backend
pub struct RuntimeContext {
    /// The loaded configuration
    pub config: Config,

    /// Migration tool backend
    pub tool: Arc<dyn MigrationTool>,

    /// Verbose output enabled
    pub verbose: bool,
}

impl RuntimeContext {
    /// Create a new runtime context from global arguments
    pub fn new(args: &GlobalArgs) -> Result<Self> {
        let project_dir = Path::new(&args.project_dir);

        // Load config from custom path or project directory
        let config = if let Some(config_path) = &args.config {
            Config::load(Path::new(config_path)).context("Failed to load configuration file")?
        } else {
            Config::load_from_dir(project_dir).context("Failed to load project configuration")?
        };

        let tool: Arc<dyn MigrationTool> = Arc::new(
            ManageTool::from_config(&config, project_dir)
                .context("Failed to set up migration tool")?,
        );

        Ok(Self {
            config,
            tool,
            verbose: args.verbose,
        })
    }

    /// Print verbose output if enabled
    pub fn verbose(&self, msg: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", msg);
        }
    }
}
