//! Integration tests for the timer driver and transport state machine

use explainer::player::{Phase, PlaybackState};

use super::helpers::{fixture_player, play_for};

#[test]
fn full_run_reaches_finished() {
    let (mut player, clock) = fixture_player();
    player.start();

    play_for(&mut player, &clock, 500);
    assert_eq!(player.current_section(), 0);

    play_for(&mut player, &clock, 1000);
    assert_eq!(player.current_section(), 1);

    play_for(&mut player, &clock, 1450);
    assert_eq!(player.current_section(), 2);
    assert!(player.is_playing());

    play_for(&mut player, &clock, 50);
    assert_eq!(player.current_section(), 2);
    assert_eq!(player.progress_percent(), 100.0);
    assert!(!player.is_playing());
    assert_eq!(player.phase(), Phase::Finished);
}

#[test]
fn finished_run_stays_finished_without_input() {
    let (mut player, clock) = fixture_player();
    player.start();
    play_for(&mut player, &clock, 3000);

    play_for(&mut player, &clock, 5000);
    assert_eq!(player.phase(), Phase::Finished);
    assert_eq!(player.state().elapsed_ms, 3000);
    assert_eq!(player.time_until_next_tick(), None);
}

#[test]
fn replay_restarts_after_delay() {
    let (mut player, clock) = fixture_player();
    player.start();
    play_for(&mut player, &clock, 3000);

    player.play_pause();
    assert_eq!(player.progress_percent(), 0.0);
    assert_eq!(player.current_section(), 0);
    assert!(!player.is_playing());

    // Playing within one tick interval after the replay delay
    play_for(&mut player, &clock, 100);
    assert!(player.is_playing());

    play_for(&mut player, &clock, 1200);
    assert_eq!(player.current_section(), 1);
}

#[test]
fn pause_and_resume_accumulate() {
    let (mut player, clock) = fixture_player();
    player.start();
    play_for(&mut player, &clock, 500);
    player.pause();

    clock.advance_ms(10_000);
    player.tick();
    assert_eq!(player.phase(), Phase::Paused);
    assert_eq!(player.state().elapsed_ms, 500);

    player.start();
    play_for(&mut player, &clock, 500);
    assert_eq!(player.state().elapsed_ms, 1000);
    assert_eq!(player.current_section(), 1);
}

#[test]
fn reset_from_any_phase_is_initial() {
    let (mut player, clock) = fixture_player();
    let initial = PlaybackState::new();

    for run_ms in [0u64, 700, 1800, 3000, 9000] {
        player.start();
        play_for(&mut player, &clock, run_ms);
        if run_ms % 2 == 0 {
            player.pause();
        }
        player.reset();
        assert_eq!(player.state(), &initial, "after {}ms", run_ms);
        assert!(!player.has_pending_start());
    }
}

#[test]
fn section_navigation_and_playback_interleave() {
    let (mut player, clock) = fixture_player();
    player.next_section();
    player.next_section();
    assert_eq!(player.current_section(), 2);
    assert_eq!(player.phase(), Phase::Paused);

    player.start();
    play_for(&mut player, &clock, 1000);
    assert_eq!(player.phase(), Phase::Finished);

    player.previous_section();
    assert_eq!(player.current_section(), 1);
    assert_eq!(player.phase(), Phase::Paused);
}
