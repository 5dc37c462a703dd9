//! Play command handler

use std::time::Duration;

use anyhow::{Context, Result};

use explainer::cli::PlayArgs;
use explainer::deck::Deck;
use explainer::player::{run_slideshow, Phase, SessionOptions};
use explainer::Config;

use super::deck_path;

/// Build the session options from config plus command-line overrides.
pub fn session_options(config: &Config, args: &PlayArgs) -> SessionOptions {
    let mut player = config.player_options();
    if let Some(ms) = args.tick_ms {
        player.tick_interval = Duration::from_millis(ms);
    }
    SessionOptions {
        player,
        autoplay: args.autoplay || config.playback.autoplay,
        theme: config.theme(),
    }
}

/// Run the slideshow.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, args: PlayArgs) -> Result<()> {
    let options = session_options(config, &args);
    let path = deck_path(args.deck, config);
    let deck = Deck::load_or_builtin(path.as_deref()).context("Failed to load deck")?;

    let final_state = run_slideshow(deck, options)?;
    if final_state.phase() == Phase::Finished {
        tracing::info!("slideshow watched to the end");
    }
    Ok(())
}
