//! Shared request types for the update workflow.
use std::path::PathBuf;

use crate::error::{GitSwiftError, Result};

/// Inputs for a single documentation-update run, as collected from the user.
///
/// All text fields default to empty; only the description is required.
#[derive(Debug, Clone, Default)]
pub struct UpdateRequest {
    /// Path to the local repository.
    pub repo_path: PathBuf,
    /// Description of the update. Required.
    pub description: String,
    /// Known issues to record. Optional.
    pub known_issues: String,
    /// High priority todo items. Optional.
    pub todo_high: String,
    /// Normal priority todo items. Optional.
    pub todo_normal: String,
    /// Future enhancement todo items. Optional.
    pub todo_future: String,
    /// Whether to also file a GitHub issue for the update.
    pub create_issue: bool,
    /// Current date in `YYYY-MM-DD` form.
    pub date: String,
}

impl UpdateRequest {
    /// Reject requests missing a description or pointing at a non-existent
    /// path, before any file is touched.
    pub fn validate(&self) -> Result<()> {
        if self.description.trim().is_empty() {
            return Err(GitSwiftError::invalid_input(
                "update description is required",
            ));
        }
        if !self.repo_path.is_dir() {
            return Err(GitSwiftError::invalid_input(format!(
                "repository path does not exist: {}",
                self.repo_path.display()
            )));
        }
        Ok(())
    }

    /// Whether any of the three todo tiers holds content.
    pub fn has_todos(&self) -> bool {
        [&self.todo_high, &self.todo_normal, &self.todo_future]
            .iter()
            .any(|tier| !tier.trim().is_empty())
    }
}

/// Current local date in `YYYY-MM-DD` form.
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
