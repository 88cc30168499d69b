//! CLI argument parsing. Each subcommand stands in for one action of the
//! original input form: collect plain strings, trigger one operation.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Global CLI arguments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, global = true)]
    /// Path to the tool configuration file. Defaults to the platform config
    /// directory.
    pub config: Option<PathBuf>,

    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Repository bookkeeping subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Update README, changelog, and update notes, then commit the changes.
    Update(UpdateArgs),

    /// Initialize a new empty git repository.
    Init(InitArgs),

    /// Ensure repository scaffolding files and an origin remote exist.
    Setup(SetupArgs),

    /// Persist the GitHub access token for future runs.
    SaveToken(SaveTokenArgs),
}

#[derive(clap::Args, Debug)]
pub struct UpdateArgs {
    #[arg(long)]
    /// Path to the local repository.
    pub repo: PathBuf,

    #[arg(long)]
    /// Description of the update.
    pub description: String,

    #[arg(long, default_value = "")]
    /// Known issues to record.
    pub known_issues: String,

    #[arg(long, default_value = "")]
    /// High priority todo items.
    pub todo_high: String,

    #[arg(long, default_value = "")]
    /// Normal priority todo items.
    pub todo_normal: String,

    #[arg(long, default_value = "")]
    /// Future enhancement todo items.
    pub todo_future: String,

    #[arg(long, default_value_t = false)]
    /// Also file a GitHub issue describing the update.
    pub create_issue: bool,

    #[arg(long)]
    /// GitHub personal access token. Falls back to the saved token.
    pub token: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    #[arg(long)]
    /// Path where the repository should be created.
    pub repo: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct SetupArgs {
    #[arg(long)]
    /// Path to the local repository.
    pub repo: PathBuf,

    #[arg(long)]
    /// Origin remote URL to add without prompting.
    pub remote_url: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct SaveTokenArgs {
    #[arg(long)]
    /// GitHub personal access token to persist.
    pub token: String,
}
