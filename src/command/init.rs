//! Repository initialization command.
use log::*;
use std::path::Path;

use crate::{
    cli::InitArgs, config::RepoConfig, error::Result, repo::Repository,
};

/// Create a new empty git repository at the given path.
pub fn execute(
    args: InitArgs,
    config: &mut RepoConfig,
    config_path: &Path,
) -> Result<()> {
    Repository::init(&args.repo)?;

    config.remember_repo(&args.repo.to_string_lossy());
    config.save(config_path)?;

    info!(
        "initialized empty git repository at {}",
        args.repo.display()
    );
    Ok(())
}
