//! Failure classification for migration-tool output
//!
//! The migration tool reports failures as free-form text, so classification
//! is substring matching against a fixed table of known phrasings. The table
//! is deliberately narrow: only "object already exists" wordings are safe to
//! auto-heal, and anything else must surface verbatim. Keeping the table
//! separate from the repair loop confines wording changes in the external
//! tool to this module.

use crate::migration_id::MigrationId;
use regex::Regex;
use std::sync::OnceLock;

/// Lowercase substrings that mark a failure as a duplicate-object error.
const DUPLICATE_PATTERNS: &[&str] = &["already exists", "duplicate column", "duplicate table"];

/// Kind of failure inferred from tool output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// A schema object the migration creates already exists in the database
    DuplicateObject,
    /// Anything else; never auto-healed
    Unclassified,
}

/// Classify tool output by case-insensitive substring search.
pub fn classify(output: &str) -> Classification {
    let lowered = output.to_lowercase();
    if DUPLICATE_PATTERNS.iter().any(|p| lowered.contains(p)) {
        Classification::DuplicateObject
    } else {
        Classification::Unclassified
    }
}

static APPLYING_RE: OnceLock<Regex> = OnceLock::new();

/// Get the compiled `Applying app.name` regex (built once, reused)
fn applying_regex() -> &'static Regex {
    APPLYING_RE.get_or_init(|| Regex::new(r"Applying (\w+)\.(\w+)").expect("valid regex"))
}

/// Find the migration the tool was applying when it failed.
///
/// First match wins. `app` and `name` are each a run of word characters.
pub fn extract_target(output: &str) -> Option<MigrationId> {
    applying_regex()
        .captures(output)
        .map(|caps| MigrationId::new(&caps[1], &caps[2]))
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod tests;
