//! Command-line interface definitions.
//!
//! Lives in the library so the xtask can generate man pages from it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Version string shown by `--version`.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "-",
    env!("VERGEN_GIT_SHA"),
    " (",
    env!("EXPLAINER_BUILD_DATE"),
    ")"
);

/// Version string shown by `--version`.
#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("EXPLAINER_BUILD_DATE"),
    ")"
);

/// Timed, auto-advancing terminal slideshow.
#[derive(Debug, Parser)]
#[command(name = "explainer", version = VERSION, about, long_about = None)]
pub struct Cli {
    /// Write tracing output to this file (filter via EXPLAINER_LOG)
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Defaults to `play` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the slideshow in the terminal
    Play(PlayArgs),

    /// Print the section timeline
    Sections(SectionsArgs),

    /// Inspect or create the config file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct PlayArgs {
    /// Deck file to play (TOML, one [[sections]] table per section)
    #[arg(long, value_name = "FILE")]
    pub deck: Option<PathBuf>,

    /// Start playing immediately
    #[arg(long)]
    pub autoplay: bool,

    /// Tick interval in milliseconds
    #[arg(long, value_name = "MS")]
    pub tick_ms: Option<u64>,
}

#[derive(Debug, Clone, Args)]
pub struct SectionsArgs {
    /// Deck file to describe instead of the built-in deck
    #[arg(long, value_name = "FILE")]
    pub deck: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = SectionsFormat::Table)]
    pub format: SectionsFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SectionsFormat {
    /// Human-readable timeline
    Table,
    /// Machine-readable timeline
    Json,
    /// Full deck as an editable deck file
    Toml,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the config file location
    Path,
}
