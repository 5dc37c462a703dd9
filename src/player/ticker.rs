//! Periodic tick schedule.
//!
//! A `Ticker` is the single repeating timer owned by the player. It does not
//! spawn threads or register callbacks: the event loop asks it whether a tick
//! is due and how long it may block until the next one. Starting an already
//! running ticker re-arms it, so at most one schedule is ever live.

use std::time::{Duration, Instant};

/// Repeating tick schedule with an explicit start/stop lifecycle.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    /// Default tick cadence.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(50);

    /// Create a stopped ticker. A zero interval is bumped to 1ms.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            next_due: None,
        }
    }

    /// Tick cadence.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Arm the ticker; the first tick is due one interval after `now`.
    ///
    /// Any previous schedule is discarded.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    /// Disarm the ticker.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Whether the ticker is armed.
    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Consume a due tick.
    ///
    /// Returns true when a tick is due at `now` and schedules the next one
    /// an interval later. Missed ticks collapse into one; the schedule never
    /// tries to catch up.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Time until the next tick, or `None` when stopped.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}
