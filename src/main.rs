//! explainer binary entry point

mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use explainer::cli::{Cli, Commands, PlayArgs};
use explainer::{logging, Config};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_file.as_deref())?;

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::config_path()?,
    };

    match cli.command {
        None => {
            let config = Config::load_from(&config_path)?;
            commands::play::handle(&config, PlayArgs::default())
        }
        Some(Commands::Play(args)) => {
            let config = Config::load_from(&config_path)?;
            commands::play::handle(&config, args)
        }
        Some(Commands::Sections(args)) => {
            let config = Config::load_from(&config_path)?;
            commands::sections::handle(&config, args)
        }
        Some(Commands::Config(cmd)) => commands::config::handle(cmd, &config_path),
        Some(Commands::Completions { shell }) => {
            commands::completions::handle(shell);
            Ok(())
        }
    }
}
