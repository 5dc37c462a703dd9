//! Timer driver and transport state machine.
//!
//! `Player` owns the deck, the clock, the single tick schedule and the
//! `PlaybackState`. Every mutation goes through one of its methods:
//!
//! ```text
//!   Idle ──play──▶ Playing ──pause──▶ Paused ──play──▶ Playing
//!                     │
//!                  (tick: elapsed ≥ total)
//!                     ▼
//!                  Finished ──play──▶ Idle ──(replay delay)──▶ Playing
//!
//!   any ──reset──▶ Idle
//! ```
//!
//! Elapsed time is `retained + (now - resumed_at)`: pausing folds the running
//! span into `retained`, so resuming continues where playback stopped.

use std::time::{Duration, Instant};

use tracing::{debug, info, trace};

use crate::deck::Deck;
use crate::player::clock::{Clock, SystemClock};
use crate::player::state::{Phase, PlaybackState};
use crate::player::ticker::Ticker;

/// Tuning for the timer driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerOptions {
    /// Tick cadence while playing
    pub tick_interval: Duration,
    /// Pause between the implicit reset and the restart on replay
    pub replay_delay: Duration,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            tick_interval: Ticker::DEFAULT_INTERVAL,
            replay_delay: Duration::from_millis(100),
        }
    }
}

/// Slideshow controller.
#[derive(Debug)]
pub struct Player<C: Clock = SystemClock> {
    deck: Deck,
    clock: C,
    ticker: Ticker,
    state: PlaybackState,
    /// Elapsed time accumulated before the current run segment
    retained: Duration,
    /// Start of the current run segment, while playing
    resumed_at: Option<Instant>,
    /// Deferred start scheduled by a replay
    pending_start: Option<Instant>,
    replay_delay: Duration,
}

impl Player<SystemClock> {
    /// Create a player driven by the system clock.
    pub fn new(deck: Deck, options: PlayerOptions) -> Self {
        Self::with_clock(deck, SystemClock, options)
    }
}

impl<C: Clock> Player<C> {
    /// Create a player driven by `clock`.
    pub fn with_clock(deck: Deck, clock: C, options: PlayerOptions) -> Self {
        Self {
            deck,
            clock,
            ticker: Ticker::new(options.tick_interval),
            state: PlaybackState::new(),
            retained: Duration::ZERO,
            resumed_at: None,
            pending_start: None,
            replay_delay: options.replay_delay,
        }
    }

    // === Observables ===

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn progress_percent(&self) -> f64 {
        self.state.progress_percent
    }

    pub fn current_section(&self) -> usize {
        self.state.current_section
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    /// Whether a replay is waiting for its delayed start.
    pub fn has_pending_start(&self) -> bool {
        self.pending_start.is_some()
    }

    pub fn tick_interval(&self) -> Duration {
        self.ticker.interval()
    }

    // === Transport ===

    /// Begin or resume ticking.
    ///
    /// No-op while already playing, and at 100% until a reset.
    pub fn start(&mut self) {
        self.pending_start = None;
        if self.state.is_playing || self.state.is_finished() {
            return;
        }

        let now = self.clock.now();
        self.resumed_at = Some(now);
        self.ticker.start(now);
        self.state.is_playing = true;
        debug!(
            elapsed_ms = self.state.elapsed_ms,
            section = self.state.current_section,
            "playback started"
        );
    }

    /// Stop ticking and keep the elapsed progress.
    ///
    /// Also cancels a pending replay start.
    pub fn pause(&mut self) {
        self.pending_start = None;
        if !self.state.is_playing {
            return;
        }

        let now = self.clock.now();
        self.sample(now);
        if self.state.is_playing {
            self.retained = self.elapsed_at(now);
            self.resumed_at = None;
            self.ticker.stop();
            self.state.is_playing = false;
            debug!(elapsed_ms = self.state.elapsed_ms, "playback paused");
        }
    }

    /// Stop ticking and return to the initial state.
    pub fn reset(&mut self) {
        self.ticker.stop();
        self.pending_start = None;
        self.retained = Duration::ZERO;
        self.resumed_at = None;
        self.state = PlaybackState::new();
        debug!("playback reset");
    }

    /// Reset, then start again after the replay delay.
    pub fn replay(&mut self) {
        self.reset();
        self.pending_start = Some(self.clock.now() + self.replay_delay);
        debug!(delay_ms = self.replay_delay.as_millis() as u64, "replay scheduled");
    }

    /// Play/pause button: replay when finished, pause while playing, start otherwise.
    pub fn play_pause(&mut self) {
        match self.phase() {
            Phase::Finished => self.replay(),
            Phase::Playing => self.pause(),
            Phase::Idle | Phase::Paused => self.start(),
        }
    }

    // === Section navigation ===

    /// Jump to the start of the next section. No-op on the last section.
    pub fn next_section(&mut self) {
        let current = self.state.current_section;
        if current < self.deck.last_index() {
            self.seek_to_section(current + 1);
        }
    }

    /// Jump to the start of the previous section (or the first one).
    pub fn previous_section(&mut self) {
        self.seek_to_section(self.state.current_section.saturating_sub(1));
    }

    /// Move elapsed time to the start of the section at `index`.
    ///
    /// Playing stays playing; any other phase ends up stopped at the new
    /// offset. A pending replay start is cancelled.
    pub fn seek_to_section(&mut self, index: usize) {
        let index = index.min(self.deck.last_index());
        let target = Duration::from_millis(self.deck.section_start(index));
        let now = self.clock.now();

        self.pending_start = None;
        self.retained = target;
        if self.state.is_playing {
            self.resumed_at = Some(now);
        } else {
            self.resumed_at = None;
        }
        self.apply_elapsed(target);
        debug!(section = index, elapsed_ms = self.state.elapsed_ms, "seeked to section");
    }

    // === Timer ===

    /// Drive the timer. Call whenever the event loop wakes up.
    ///
    /// Fires a pending replay start once its delay has passed, then
    /// recomputes elapsed time, progress and section if a tick is due.
    /// Returns true when the observable state changed.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        let mut changed = false;

        if let Some(at) = self.pending_start {
            if now >= at {
                self.start();
                changed = true;
            }
        }

        if self.state.is_playing && self.ticker.poll(now) {
            self.sample(now);
            changed = true;
        }

        changed
    }

    /// How long the event loop may block before `tick` has work to do.
    ///
    /// `None` when nothing is scheduled.
    pub fn time_until_next_tick(&self) -> Option<Duration> {
        let now = self.clock.now();
        let pending = self
            .pending_start
            .map(|at| at.saturating_duration_since(now));
        let tick = if self.state.is_playing {
            self.ticker.time_until_next(now)
        } else {
            None
        };

        match (pending, tick) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn elapsed_at(&self, now: Instant) -> Duration {
        match self.resumed_at {
            Some(resumed) => self.retained + now.saturating_duration_since(resumed),
            None => self.retained,
        }
    }

    /// Recompute the observables at `now`, finishing the run at 100%.
    fn sample(&mut self, now: Instant) {
        let elapsed = self.elapsed_at(now);
        let total = self.deck.total_duration();

        if elapsed >= total {
            self.finish();
            return;
        }

        self.apply_elapsed(elapsed);
        trace!(
            elapsed_ms = self.state.elapsed_ms,
            progress = self.state.progress_percent,
            section = self.state.current_section,
            "tick"
        );
    }

    fn apply_elapsed(&mut self, elapsed: Duration) {
        let total = self.deck.total_duration();
        let elapsed_ms = elapsed.as_millis() as u64;
        let previous_section = self.state.current_section;

        // Progress follows the truncated milliseconds so both agree on zero
        self.state.elapsed_ms = elapsed_ms;
        self.state.progress_percent =
            (elapsed_ms as f64 / total.as_millis() as f64 * 100.0).clamp(0.0, 100.0);
        self.state.current_section = self.deck.resolve(elapsed_ms);

        if self.state.current_section != previous_section {
            if let Some(section) = self.deck.get(self.state.current_section) {
                debug!(
                    section = self.state.current_section,
                    id = %section.id,
                    "section changed"
                );
            }
        }
    }

    fn finish(&mut self) {
        self.ticker.stop();
        self.retained = self.deck.total_duration();
        self.resumed_at = None;
        self.state.is_playing = false;
        self.state.elapsed_ms = self.deck.total_ms();
        self.state.progress_percent = 100.0;
        self.state.current_section = self.deck.last_index();
        info!(total_ms = self.deck.total_ms(), "playback finished");
    }
}

impl<C: Clock> Drop for Player<C> {
    fn drop(&mut self) {
        self.ticker.stop();
        self.pending_start = None;
        trace!("player dropped, ticker released");
    }
}
