//! The documentation writer: mutates the three managed Markdown documents
//! for an update run.
//!
//! README.md and CHANGELOG.md are insert targets whose prior content is
//! preserved; UPDATE_NOTES.md holds notes for the latest update only and is
//! rewritten from scratch every run. There is no rollback across the three
//! files: the first failing write aborts the run and earlier writes stand.
use log::*;
use std::fs;
use std::path::Path;

use crate::{command::types::UpdateRequest, error::Result};

pub const README_FILE: &str = "README.md";
pub const CHANGELOG_FILE: &str = "CHANGELOG.md";
pub const UPDATE_NOTES_FILE: &str = "UPDATE_NOTES.md";

/// The documents staged and committed by every update run.
pub const MANAGED_FILES: [&str; 3] =
    [README_FILE, CHANGELOG_FILE, UPDATE_NOTES_FILE];

/// Heading marker locating the update section in README.md.
const LATEST_UPDATES_MARKER: &str = "### Latest Updates";

const CHANGELOG_TITLE: &str = "# Changelog";

const NO_KNOWN_ISSUES: &str = "- [ ] No known issues reported";
const NO_TODO_ITEMS: &str = "- [ ] No todo items added";

/// Apply all three document mutations for the given request.
pub fn write_all(request: &UpdateRequest) -> Result<()> {
    update_readme(&request.repo_path, &request.description, &request.date)?;
    prepend_changelog(&request.repo_path, &request.description, &request.date)?;
    write_update_notes(request)?;
    Ok(())
}

/// Insert a dated update entry into README.md, creating the file with a
/// status stub when absent.
///
/// The marker match is a bare substring check, so a heading dated by a
/// previous run matches again and entries accumulate instead of merging.
/// That mirrors the tool's established output and is pinned by tests.
pub fn update_readme(
    root: &Path,
    description: &str,
    date: &str,
) -> Result<()> {
    let path = root.join(README_FILE);

    if !path.exists() {
        debug!("creating {README_FILE}");
        fs::write(
            &path,
            format!(
                "# {}\n\n## Current Status\n🟢 Active Development\n",
                dir_title(root)
            ),
        )?;
    }

    let content = fs::read_to_string(&path)?;
    let entry = format!("{LATEST_UPDATES_MARKER} ({date})\n- {description}\n");

    let updated = if content.contains(LATEST_UPDATES_MARKER) {
        content.replacen(LATEST_UPDATES_MARKER, &entry, 1)
    } else {
        format!("{content}\n{entry}")
    };

    fs::write(&path, updated)?;
    Ok(())
}

/// Insert a new version block at the top of CHANGELOG.md, newest first.
///
/// The `# Changelog` title stays pinned as the first line; the new block
/// lands directly beneath it, before all previous entries.
pub fn prepend_changelog(
    root: &Path,
    description: &str,
    date: &str,
) -> Result<()> {
    let path = root.join(CHANGELOG_FILE);

    let previous = if path.exists() {
        fs::read_to_string(&path)?
    } else {
        debug!("creating {CHANGELOG_FILE}");
        String::new()
    };

    let body = previous
        .strip_prefix(CHANGELOG_TITLE)
        .map(|rest| rest.trim_start_matches('\n'))
        .unwrap_or(previous.as_str());

    let updated = format!(
        "{CHANGELOG_TITLE}\n\n## [{date}]\n### Added\n- {description}\n\n{body}"
    );

    fs::write(&path, updated)?;
    Ok(())
}

/// Overwrite UPDATE_NOTES.md with the template for this run.
pub fn write_update_notes(request: &UpdateRequest) -> Result<()> {
    let path = request.repo_path.join(UPDATE_NOTES_FILE);
    fs::write(&path, render_update_notes(request))?;
    Ok(())
}

fn render_update_notes(request: &UpdateRequest) -> String {
    let known_issues = if request.known_issues.trim().is_empty() {
        NO_KNOWN_ISSUES
    } else {
        request.known_issues.as_str()
    };

    format!(
        "# Update Notes ({})\n\
         \n\
         ## Changes Made\n\
         - {}\n\
         \n\
         ## Known Issues\n\
         {}\n\
         \n\
         ## Todo\n\
         {}\n\
         \n\
         ## Testing Notes\n\
         - [ ] Add testing requirements/results\n\
         \n\
         ## Dependencies\n\
         - List any new dependencies added\n\
         \n\
         ## Migration Steps\n\
         1. Pull latest changes\n\
         2. [Add any necessary migration steps]\n\
         \n\
         ## Rollback Plan\n\
         1. [Document how to rollback these changes if needed]\n",
        request.date,
        request.description,
        known_issues,
        aggregate_todos(request),
    )
}

/// Collect the non-empty todo tiers under their own subheadings, or the
/// placeholder line when every tier is empty.
fn aggregate_todos(request: &UpdateRequest) -> String {
    let tiers = [
        ("### High Priority", &request.todo_high),
        ("### Normal Priority", &request.todo_normal),
        ("### Future Enhancements", &request.todo_future),
    ];

    let sections: Vec<String> = tiers
        .iter()
        .filter(|(_, items)| !items.trim().is_empty())
        .map(|(heading, items)| format!("{heading}\n{items}"))
        .collect();

    if sections.is_empty() {
        NO_TODO_ITEMS.to_string()
    } else {
        sections.join("\n\n")
    }
}

/// Document title derived from the directory name.
pub(crate) fn dir_title(root: &Path) -> String {
    root.canonicalize()
        .ok()
        .as_deref()
        .unwrap_or(root)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "repository".to_string())
}
