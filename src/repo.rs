//! Local git repository operations used by the update and setup workflows.
//!
//! Wraps `git2` with the handful of operations this tool needs: open and
//! initialize repositories, stage named documents, create commits, and
//! manage the `origin` remote. All operations are local; nothing here talks
//! to the network.
use log::*;
use std::path::Path;

use crate::error::{GitSwiftError, Result};

/// Conventional name of the primary configured remote.
pub const ORIGIN_REMOTE: &str = "origin";

/// High-level interface over a local git repository.
pub struct Repository {
    repo: git2::Repository,
}

impl Repository {
    /// Open an existing repository at `path`.
    ///
    /// Fails with a git error if the path is not a repository root.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = git2::Repository::open(path)?;
        Ok(Self { repo })
    }

    /// Initialize a new repository at `path`.
    ///
    /// Fails if the path already is a repository; initializing twice is a
    /// user mistake worth surfacing rather than silently accepting.
    pub fn init(path: &Path) -> Result<Self> {
        if git2::Repository::open(path).is_ok() {
            return Err(GitSwiftError::invalid_input(format!(
                "path is already a git repository: {}",
                path.display()
            )));
        }
        info!("initializing git repository at {}", path.display());
        let repo = git2::Repository::init(path)?;
        Ok(Self { repo })
    }

    /// Open the repository at `path`, initializing a fresh one if none
    /// exists. Used by the idempotent setup operation.
    pub fn open_or_init(path: &Path) -> Result<Self> {
        match git2::Repository::open(path) {
            Ok(repo) => Ok(Self { repo }),
            Err(_) => {
                info!(
                    "no repository found, initializing at {}",
                    path.display()
                );
                let repo = git2::Repository::init(path)?;
                Ok(Self { repo })
            }
        }
    }

    /// Stage exactly the named paths, relative to the repository root.
    pub fn stage(&self, paths: &[&str]) -> Result<()> {
        debug!("staging files: {paths:?}");
        let mut index = self.repo.index()?;
        for path in paths {
            index.add_path(Path::new(path))?;
        }
        index.write()?;
        Ok(())
    }

    /// Create a commit from the staged changes.
    ///
    /// Author and committer come from the repository's git configuration
    /// (`user.name` and `user.email`). Handles the root commit of a freshly
    /// initialized repository, where HEAD has no commit yet.
    pub fn commit(&self, msg: &str) -> Result<()> {
        debug!("committing changes with msg: {msg}");
        let config = self.repo.config()?.snapshot()?;
        let user = config.get_str("user.name")?;
        let email = config.get_str("user.email")?;
        let mut index = self.repo.index()?;
        let oid = index.write_tree()?;
        let tree = self.repo.find_tree(oid)?;
        let signature = git2::Signature::now(user, email)?;

        let parent = match self.repo.head() {
            Ok(head) => Some(head.peel_to_commit()?),
            Err(_) => None,
        };
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            msg,
            &tree,
            &parents,
        )?;
        Ok(())
    }

    /// Whether an `origin` remote is configured.
    pub fn has_origin(&self) -> bool {
        self.repo.find_remote(ORIGIN_REMOTE).is_ok()
    }

    /// URL of the `origin` remote.
    pub fn origin_url(&self) -> Result<String> {
        let remote =
            self.repo.find_remote(ORIGIN_REMOTE).map_err(|_| {
                GitSwiftError::InvalidRemoteUrl(
                    "no origin remote configured".to_string(),
                )
            })?;
        remote
            .url()
            .map(str::to_string)
            .ok_or_else(|| {
                GitSwiftError::InvalidRemoteUrl(
                    "origin remote url is not valid utf-8".to_string(),
                )
            })
    }

    /// Add an `origin` remote pointing at `url`.
    pub fn add_origin(&self, url: &str) -> Result<()> {
        info!("adding origin remote: {url}");
        self.repo.remote(ORIGIN_REMOTE, url)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn init_with_user(path: &Path) -> Repository {
        let repo = Repository::init(path).unwrap();
        let mut config = repo.repo.config().unwrap();
        config.set_str("user.name", "tester").unwrap();
        config.set_str("user.email", "tester@example.com").unwrap();
        repo
    }

    #[test]
    fn init_creates_a_repository() {
        let dir = tempfile::tempdir().unwrap();
        Repository::init(dir.path()).unwrap();

        assert!(dir.path().join(".git").exists());
        assert!(Repository::open(dir.path()).is_ok());
    }

    #[test]
    fn init_fails_on_existing_repository() {
        let dir = tempfile::tempdir().unwrap();
        Repository::init(dir.path()).unwrap();

        let result = Repository::init(dir.path());
        assert!(matches!(result, Err(GitSwiftError::InvalidInput(_))));
    }

    #[test]
    fn open_fails_on_plain_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = Repository::open(dir.path());
        assert!(matches!(result, Err(GitSwiftError::Git(_))));
    }

    #[test]
    fn open_or_init_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        Repository::open_or_init(dir.path()).unwrap();
        Repository::open_or_init(dir.path()).unwrap();

        assert!(Repository::open(dir.path()).is_ok());
    }

    #[test]
    fn stages_and_commits_named_paths() {
        let dir = tempfile::tempdir().unwrap();
        let repo = init_with_user(dir.path());

        fs::write(dir.path().join("README.md"), "# test\n").unwrap();
        fs::write(dir.path().join("CHANGELOG.md"), "# Changelog\n").unwrap();

        repo.stage(&["README.md", "CHANGELOG.md"]).unwrap();
        repo.commit("update(2024-01-01): fix bug").unwrap();

        let head = repo.repo.head().unwrap().peel_to_commit().unwrap();
        assert_eq!(head.message().unwrap(), "update(2024-01-01): fix bug");
        assert_eq!(head.parent_count(), 0);

        let tree = head.tree().unwrap();
        assert!(tree.get_name("README.md").is_some());
        assert!(tree.get_name("CHANGELOG.md").is_some());
    }

    #[test]
    fn second_commit_has_a_parent() {
        let dir = tempfile::tempdir().unwrap();
        let repo = init_with_user(dir.path());

        fs::write(dir.path().join("README.md"), "one\n").unwrap();
        repo.stage(&["README.md"]).unwrap();
        repo.commit("first").unwrap();

        fs::write(dir.path().join("README.md"), "two\n").unwrap();
        repo.stage(&["README.md"]).unwrap();
        repo.commit("second").unwrap();

        let head = repo.repo.head().unwrap().peel_to_commit().unwrap();
        assert_eq!(head.message().unwrap(), "second");
        assert_eq!(head.parent_count(), 1);
    }

    #[test]
    fn origin_url_errors_without_remote() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();

        assert!(!repo.has_origin());
        let result = repo.origin_url();
        assert!(matches!(result, Err(GitSwiftError::InvalidRemoteUrl(_))));
    }

    #[test]
    fn adds_and_reads_origin_remote() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();

        repo.add_origin("https://github.com/owner/repo.git").unwrap();

        assert!(repo.has_origin());
        assert_eq!(
            repo.origin_url().unwrap(),
            "https://github.com/owner/repo.git"
        );
    }
}
