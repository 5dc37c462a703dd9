//! Subcommand handlers

pub mod completions;
pub mod config;
pub mod play;
pub mod sections;

use std::path::PathBuf;

use explainer::Config;

/// Deck path from the command line, falling back to the config file.
pub fn deck_path(cli_deck: Option<PathBuf>, config: &Config) -> Option<PathBuf> {
    cli_deck.or_else(|| config.playback.deck.clone())
}
