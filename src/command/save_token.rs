//! Token persistence command.
use log::*;
use std::path::Path;

use crate::{
    cli::SaveTokenArgs,
    config::RepoConfig,
    error::{GitSwiftError, Result},
};

/// Store the GitHub access token in the tool configuration.
pub fn execute(
    args: SaveTokenArgs,
    config: &mut RepoConfig,
    config_path: &Path,
) -> Result<()> {
    if args.token.trim().is_empty() {
        return Err(GitSwiftError::invalid_input("token must not be empty"));
    }

    config.github_token = args.token;
    config.save(config_path)?;

    info!("GitHub token saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saves_token_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("repo_config.json");
        let mut config = RepoConfig::default();

        let args = SaveTokenArgs {
            token: "ghp_secret".to_string(),
        };
        execute(args, &mut config, &config_path).unwrap();

        let loaded = RepoConfig::load(&config_path).unwrap();
        assert_eq!(loaded.github_token, "ghp_secret");
    }

    #[test]
    fn rejects_empty_token() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("repo_config.json");
        let mut config = RepoConfig::default();

        let args = SaveTokenArgs {
            token: "   ".to_string(),
        };
        let result = execute(args, &mut config, &config_path);
        assert!(matches!(result, Err(GitSwiftError::InvalidInput(_))));
    }
}
