//! Issue composition and response types.
//!
//! An update issue is composed entirely from the [`UpdateRequest`]: a dated
//! title truncated to a readable length, a Markdown body whose optional
//! sections appear only when they have content, and a label set derived
//! from which fields were filled in.
use crate::command::types::UpdateRequest;

/// Longest description prefix included in an issue title.
const TITLE_DESCRIPTION_LIMIT: usize = 50;

const LABEL_UPDATE: &str = "update";
const LABEL_HAS_ISSUES: &str = "has-issues";
const LABEL_HIGH_PRIORITY: &str = "high-priority";
const LABEL_ENHANCEMENT: &str = "enhancement";

const ISSUE_FOOTER: &str =
    "*This issue was automatically created by the Repository Update Tool*";

/// A composed issue ready to be filed with the hosting service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateIssueRequest {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

impl CreateIssueRequest {
    /// Compose title, body, and labels for an update issue.
    pub fn from_update(request: &UpdateRequest) -> Self {
        Self {
            title: compose_title(request),
            body: compose_body(request),
            labels: compose_labels(request),
        }
    }
}

/// An issue created in the remote repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueTicket {
    /// Issue number assigned by the hosting service.
    pub number: u64,
    /// Browsable URL of the created issue.
    pub url: String,
}

fn compose_title(request: &UpdateRequest) -> String {
    let description = &request.description;
    if description.chars().count() > TITLE_DESCRIPTION_LIMIT {
        let prefix: String =
            description.chars().take(TITLE_DESCRIPTION_LIMIT).collect();
        format!("Update ({}): {}...", request.date, prefix)
    } else {
        format!("Update ({}): {}", request.date, description)
    }
}

fn compose_body(request: &UpdateRequest) -> String {
    let mut body = format!(
        "# Repository Update - {}\n\n## Description\n{}\n",
        request.date, request.description
    );

    if !request.known_issues.trim().is_empty() {
        body.push_str(&format!(
            "\n## Known Issues\n{}\n",
            request.known_issues
        ));
    }

    if request.has_todos() {
        body.push_str("\n## Todo Items");

        if !request.todo_high.trim().is_empty() {
            body.push_str(&format!(
                "\n### 🔴 High Priority\n{}\n",
                request.todo_high
            ));
        }

        if !request.todo_normal.trim().is_empty() {
            body.push_str(&format!(
                "\n### 🟡 Normal Priority\n{}\n",
                request.todo_normal
            ));
        }

        if !request.todo_future.trim().is_empty() {
            body.push_str(&format!(
                "\n### 🔵 Future Enhancements\n{}\n",
                request.todo_future
            ));
        }
    }

    body.push_str(&format!("\n---\n{ISSUE_FOOTER}"));
    body
}

fn compose_labels(request: &UpdateRequest) -> Vec<String> {
    let mut labels = vec![LABEL_UPDATE.to_string()];
    if !request.known_issues.trim().is_empty() {
        labels.push(LABEL_HAS_ISSUES.to_string());
    }
    if !request.todo_high.trim().is_empty() {
        labels.push(LABEL_HIGH_PRIORITY.to_string());
    }
    if !request.todo_future.trim().is_empty() {
        labels.push(LABEL_ENHANCEMENT.to_string());
    }
    labels
}
