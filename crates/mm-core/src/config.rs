//! Configuration types and parsing for migramend.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Project configuration from migramend.yml
///
/// Every field has a default, so a project without a config file gets the
/// stock `python manage.py` setup and `mm repair` stays a zero-argument
/// entry point.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Argv prefix for the migration tool (the `migrate` subcommand and its
    /// arguments are appended to this)
    #[serde(default = "default_manage_command")]
    pub manage_command: Vec<String>,

    /// Directory to spawn the tool in, relative to the project directory
    #[serde(default)]
    pub working_dir: Option<String>,

    /// Extra environment variables layered over the inherited environment
    #[serde(default)]
    pub env: HashMap<String, String>,

    /// Upper bound on apply attempts before the repair loop gives up
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
}

fn default_manage_command() -> Vec<String> {
    vec!["python".to_string(), "manage.py".to_string()]
}

fn default_max_attempts() -> usize {
    50
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manage_command: default_manage_command(),
            working_dir: None,
            env: HashMap::new(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a project directory
    ///
    /// Looks for migramend.yml or migramend.yaml; falls back to defaults if
    /// neither exists.
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        let yml_path = dir.join("migramend.yml");
        let yaml_path = dir.join("migramend.yaml");

        if yml_path.exists() {
            Self::load(&yml_path)
        } else if yaml_path.exists() {
            Self::load(&yaml_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values
    fn validate(&self) -> CoreResult<()> {
        if self.manage_command.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "manage_command must not be empty".to_string(),
            });
        }
        if self.max_attempts == 0 {
            return Err(CoreError::ConfigInvalid {
                message: "max_attempts must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
