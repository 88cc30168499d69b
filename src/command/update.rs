//! The documentation-update workflow: write the three documents, commit
//! them, and optionally file a GitHub issue describing the update.
//!
//! The two side effects are reported independently. A failure before the
//! commit aborts the run; a failure while filing the issue is logged and
//! the commit stands, since the repository update already succeeded.
use log::*;
use secrecy::{ExposeSecret, SecretString};
use std::path::Path;

use crate::{
    cli::UpdateArgs,
    command::types::{UpdateRequest, today},
    config::RepoConfig,
    docs,
    error::{GitSwiftError, Result},
    forge::{
        config::RemoteConfig,
        github::Github,
        traits::Forge,
        types::{CreateIssueRequest, IssueTicket},
    },
    repo::Repository,
};

/// Execute the update command.
pub async fn execute(
    args: UpdateArgs,
    config: &mut RepoConfig,
    config_path: &Path,
) -> Result<()> {
    let token = SecretString::from(
        args.token
            .clone()
            .unwrap_or_else(|| config.github_token.clone()),
    );

    let request = UpdateRequest {
        repo_path: args.repo,
        description: args.description,
        known_issues: args.known_issues,
        todo_high: args.todo_high,
        todo_normal: args.todo_normal,
        todo_future: args.todo_future,
        create_issue: args.create_issue,
        date: today(),
    };
    request.validate()?;

    config.remember_repo(&request.repo_path.to_string_lossy());
    config.save(config_path)?;

    apply_update(&request)?;
    info!("repository updated: {}", request.repo_path.display());

    if request.create_issue {
        match file_issue(&request, token).await {
            Ok(ticket) => {
                info!("created GitHub issue #{}: {}", ticket.number, ticket.url)
            }
            Err(err) => {
                warn!(
                    "repository updated but failed to create GitHub issue: {err}"
                )
            }
        }
    }

    Ok(())
}

/// Write the three managed documents and commit them.
pub fn apply_update(request: &UpdateRequest) -> Result<()> {
    docs::write_all(request)?;

    let repo = Repository::open(&request.repo_path)?;
    repo.stage(&docs::MANAGED_FILES)?;
    repo.commit(&commit_message(request))?;

    Ok(())
}

/// Derive the remote coordinates from the origin remote and file the issue.
pub async fn file_issue(
    request: &UpdateRequest,
    token: SecretString,
) -> Result<IssueTicket> {
    if token.expose_secret().is_empty() {
        return Err(GitSwiftError::MissingToken);
    }

    let repo = Repository::open(&request.repo_path)?;
    let remote = RemoteConfig::from_remote_url(&repo.origin_url()?, token)?;
    let forge = Github::new(remote).await?;

    create_update_issue(&forge, request).await
}

async fn create_update_issue(
    forge: &dyn Forge,
    request: &UpdateRequest,
) -> Result<IssueTicket> {
    forge.create_issue(CreateIssueRequest::from_update(request)).await
}

fn commit_message(request: &UpdateRequest) -> String {
    format!(
        "update({}): {}\n\n\
         - Updated documentation\n\
         - Added changelog entry\n\
         - Created update notes",
        request.date, request.description
    )
}
