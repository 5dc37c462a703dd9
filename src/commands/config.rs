//! Config subcommands handler

use std::path::Path;

use anyhow::{bail, Result};

use explainer::cli::ConfigCommands;
use explainer::Config;

/// Dispatch a `config` subcommand.
pub fn handle(cmd: ConfigCommands, config_path: &Path) -> Result<()> {
    match cmd {
        ConfigCommands::Show => handle_show(config_path),
        ConfigCommands::Init { force } => handle_init(config_path, force),
        ConfigCommands::Path => {
            println!("{}", config_path.display());
            Ok(())
        }
    }
}

/// Show current configuration as TOML.
pub fn handle_show(config_path: &Path) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let theme = config.theme();
    println!("{}", theme.primary_text(&config.to_toml()?));
    Ok(())
}

/// Write the default configuration file.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn handle_init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Config file {} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    let config = Config::default();
    config.save_to(config_path)?;
    tracing::info!(path = %config_path.display(), "config written");

    let theme = config.theme();
    println!(
        "{}",
        theme.primary_text(&format!("Wrote {}", config_path.display()))
    );
    Ok(())
}
