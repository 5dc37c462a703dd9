//! Explainer - timed, auto-advancing terminal slideshow
//!
//! A fixed sequence of sections plays over a fixed total duration with
//! play/pause/reset/replay transport, a progress bar and section indicators.
//!
//! - `deck`: section definitions, validation and elapsed-time resolution
//! - `player`: timer driver, transport state machine, rendering, event loop
//! - `config`: TOML configuration file
//! - `theme`: colors for the player and CLI output
//! - `cli`: clap definitions shared by the binary and xtask

pub mod cli;
pub mod config;
pub mod deck;
pub mod logging;
pub mod player;
pub mod theme;

pub use config::Config;
pub use deck::{Deck, DeckError, Section};
pub use player::{Phase, PlaybackState, Player, PlayerOptions};
