//! Shared helpers for integration tests

use std::fs;
use std::path::PathBuf;

use explainer::deck::Deck;
use explainer::player::{ManualClock, Player, PlayerOptions};
use tempfile::TempDir;

/// Directory holding the test fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Copy a fixture into a fresh temp dir and return both.
///
/// Keep the `TempDir` alive for as long as the path is used.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    fs::copy(fixtures_dir().join(name), &path).expect("Failed to copy fixture");
    (dir, path)
}

/// Player over the three one-second sections fixture, driven by a manual clock.
pub fn fixture_player() -> (Player<ManualClock>, ManualClock) {
    let deck = Deck::load(&fixtures_dir().join("three_sections.toml")).expect("fixture deck");
    let clock = ManualClock::new();
    let player = Player::with_clock(deck, clock.clone(), PlayerOptions::default());
    (player, clock)
}

/// Advance the clock in tick-sized steps, ticking after each one.
pub fn play_for(player: &mut Player<ManualClock>, clock: &ManualClock, ms: u64) {
    let step = player.tick_interval().as_millis() as u64;
    let mut remaining = ms;
    while remaining > 0 {
        let d = remaining.min(step);
        clock.advance_ms(d);
        player.tick();
        remaining -= d;
    }
}
