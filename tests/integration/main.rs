//! Integration test harness

mod cli_test;
mod deck_test;
mod helpers;
mod playback_test;
