//! Tracing setup.
//!
//! The slideshow owns the terminal, so log output never goes to stdout or
//! stderr. Logging is enabled only when a log file is given; the filter comes
//! from `EXPLAINER_LOG` (falling back to `info`).

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "EXPLAINER_LOG";

/// Build the filter from `EXPLAINER_LOG`, defaulting to `info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a file-backed subscriber when `log_file` is set.
///
/// Returns whether a subscriber was installed.
pub fn init(log_file: Option<&Path>) -> Result<bool> {
    let Some(path) = log_file else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging initialized");
    Ok(true)
}
