use clap::Parser;

mod cli;
mod command;
mod config;
mod docs;
mod error;
mod forge;
mod repo;

use crate::{config::RepoConfig, error::Result};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("gitswift")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli_args = cli::Args::parse();

    initialize_logger(cli_args.debug)?;

    let config_path = cli_args
        .config
        .clone()
        .unwrap_or_else(RepoConfig::default_path);
    let mut repo_config = RepoConfig::load(&config_path)?;

    match cli_args.command {
        cli::Command::Update(args) => {
            command::update::execute(args, &mut repo_config, &config_path)
                .await
        }
        cli::Command::Init(args) => {
            command::init::execute(args, &mut repo_config, &config_path)
        }
        cli::Command::Setup(args) => {
            command::setup::execute(args, &mut repo_config, &config_path)
        }
        cli::Command::SaveToken(args) => {
            command::save_token::execute(args, &mut repo_config, &config_path)
        }
    }
}
