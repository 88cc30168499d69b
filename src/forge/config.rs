//! Connection configuration for the remote-hosting service, derived from
//! the local repository's origin remote.
use git_url_parse::GitUrl;
use secrecy::SecretString;

use crate::error::{GitSwiftError, Result};

/// Remote repository coordinates and credentials for filing issues.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Access token for authentication.
    pub token: SecretString,
}

impl RemoteConfig {
    /// Derive owner and repository name from a git remote URL.
    ///
    /// Works for both HTTPS and SSH remotes; a trailing `.git` suffix is
    /// stripped from the repository name.
    pub fn from_remote_url(url: &str, token: SecretString) -> Result<Self> {
        let parsed = GitUrl::parse(url)?;

        let owner = parsed.owner.ok_or_else(|| {
            GitSwiftError::InvalidRemoteUrl(format!(
                "unable to parse owner from remote url: {url}"
            ))
        })?;

        if parsed.name.is_empty() {
            return Err(GitSwiftError::InvalidRemoteUrl(format!(
                "unable to parse repository name from remote url: {url}"
            )));
        }

        Ok(Self {
            owner,
            repo: parsed.name,
            token,
        })
    }

    /// The `owner/repo` path used when resolving the repository handle.
    pub fn path(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}
