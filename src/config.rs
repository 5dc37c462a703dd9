//! Configuration file handling.
//!
//! The config lives at `<config_dir>/explainer/config.toml` (overridable with
//! `--config` or `EXPLAINER_CONFIG`). A missing file means defaults; every
//! field is optional.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::player::PlayerOptions;
use crate::theme::{Theme, ThemeName};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "EXPLAINER_CONFIG";

/// Playback tuning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Tick cadence in milliseconds
    pub tick_interval_ms: u64,
    /// Delay between the implicit reset and restart on replay
    pub replay_delay_ms: u64,
    /// Start playing as soon as the player opens
    pub autoplay: bool,
    /// Deck file to play instead of the built-in deck
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deck: Option<PathBuf>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 50,
            replay_delay_ms: 100,
            autoplay: false,
            deck: None,
        }
    }
}

/// Appearance settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: ThemeName,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Default config file location.
    ///
    /// `EXPLAINER_CONFIG` wins over the platform config directory.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("explainer").join("config.toml"))
    }

    /// Load from `path`, falling back to defaults when the file is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Save to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Render as pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Timer options derived from the playback section.
    pub fn player_options(&self) -> PlayerOptions {
        PlayerOptions {
            tick_interval: Duration::from_millis(self.playback.tick_interval_ms),
            replay_delay: Duration::from_millis(self.playback.replay_delay_ms),
        }
    }

    /// Theme selected in the ui section.
    pub fn theme(&self) -> Theme {
        self.ui.theme.theme()
    }
}
