//! Implements the Forge trait for GitHub using octocrab.
use async_trait::async_trait;
use log::*;
use octocrab::Octocrab;
use secrecy::ExposeSecret;

use crate::{
    error::{GitSwiftError, Result},
    forge::{
        config::RemoteConfig,
        traits::Forge,
        types::{CreateIssueRequest, IssueTicket},
    },
};

/// GitHub forge implementation using Octocrab for issue creation.
pub struct Github {
    config: RemoteConfig,
    instance: Octocrab,
}

impl Github {
    /// Create a GitHub client with personal access token authentication.
    ///
    /// Resolves the repository handle up front so a bad owner/repo or a
    /// rejected token fails here rather than at issue creation.
    pub async fn new(config: RemoteConfig) -> Result<Self> {
        if config.token.expose_secret().is_empty() {
            return Err(GitSwiftError::MissingToken);
        }

        let instance = Octocrab::builder()
            .personal_token(config.token.clone())
            .build()?;

        debug!("resolving repository handle: {}", config.path());
        instance.repos(&config.owner, &config.repo).get().await?;

        Ok(Self { config, instance })
    }
}

#[async_trait]
impl Forge for Github {
    async fn create_issue(
        &self,
        req: CreateIssueRequest,
    ) -> Result<IssueTicket> {
        info!("creating issue in {}: {}", self.config.path(), req.title);

        let issue = self
            .instance
            .issues(&self.config.owner, &self.config.repo)
            .create(&req.title)
            .body(&req.body)
            .labels(req.labels.clone())
            .send()
            .await?;

        info!("created issue #{}", issue.number);

        Ok(IssueTicket {
            number: issue.number as u64,
            url: issue.html_url.to_string(),
        })
    }
}
