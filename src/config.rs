//! Persisted tool configuration: the GitHub token and recently used
//! repository paths.
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Default configuration filename.
pub const CONFIG_FILE: &str = "repo_config.json";

/// Maximum number of repository paths kept in the recent list.
pub const MAX_RECENT_REPOS: usize = 5;

/// Root configuration structure persisted as JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RepoConfig {
    /// GitHub personal access token used when filing issues.
    pub github_token: String,
    /// Recently used repository paths, most recent first.
    pub recent_repos: Vec<String>,
}

impl RepoConfig {
    /// Default location of the configuration file: the platform config
    /// directory, falling back to the working directory.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join("gitswift").join(CONFIG_FILE))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }

    /// Load configuration from `path`, returning defaults when no file
    /// exists yet.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Write configuration back to `path`, creating parent directories as
    /// needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Record `path` as the most recently used repository.
    ///
    /// An already-known path moves to the front instead of duplicating, and
    /// the list never grows beyond [`MAX_RECENT_REPOS`] entries.
    pub fn remember_repo(&mut self, path: &str) {
        self.recent_repos.retain(|known| known != path);
        self.recent_repos.insert(0, path.to_string());
        self.recent_repos.truncate(MAX_RECENT_REPOS);
    }
}
