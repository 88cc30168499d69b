//! Traits related to remote hosting services.
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{
    error::Result,
    forge::types::{CreateIssueRequest, IssueTicket},
};

/// A remote hosting platform that can file issues against a repository.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Forge {
    /// File an issue in the remote repository.
    async fn create_issue(
        &self,
        req: CreateIssueRequest,
    ) -> Result<IssueTicket>;
}
