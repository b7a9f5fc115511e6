//! Migration identity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of one migration unit: the app label and the migration name,
/// as the tool prints them in `Applying app.name...` lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MigrationId {
    /// Application label (e.g. `shop`)
    pub app: String,

    /// Migration file name without extension (e.g. `0003_create_order`)
    pub name: String,
}

impl MigrationId {
    /// Create a new migration id
    pub fn new(app: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            app: app.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for MigrationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.app, self.name)
    }
}

#[cfg(test)]
#[path = "migration_id_test.rs"]
mod tests;
