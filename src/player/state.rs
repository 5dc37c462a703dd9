//! Player state management
//!
//! Contains the `PlaybackState` snapshot owned by the controller, the
//! derived transport `Phase`, and the UI-only `ViewState` used by the
//! terminal session.

/// Result of processing an input event.
///
/// This enum is returned by input handlers to signal control flow
/// decisions to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue the slideshow
    Continue,
    /// Exit the player
    Quit,
}

/// Transport phase derived from a `PlaybackState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing elapsed and not playing
    Idle,
    /// Ticking
    Playing,
    /// Stopped part-way through
    Paused,
    /// Reached 100%
    Finished,
}

impl Phase {
    /// Label for the play/pause control in this phase.
    pub fn action_label(&self) -> &'static str {
        match self {
            Phase::Playing => "pause",
            Phase::Finished => "replay",
            Phase::Idle | Phase::Paused => "play",
        }
    }
}

/// Observable playback values.
///
/// Mutated only by the controller, either on a tick or in response to an
/// explicit transport action. `progress_percent == 100.0` implies
/// `is_playing == false`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// Whether the tick is running
    pub is_playing: bool,
    /// Elapsed playback time in milliseconds
    pub elapsed_ms: u64,
    /// Share of the total duration elapsed, 0.0..=100.0
    pub progress_percent: f64,
    /// Active section index
    pub current_section: usize,
}

impl PlaybackState {
    /// Initial mount state: stopped at the very beginning.
    pub fn new() -> Self {
        Self {
            is_playing: false,
            elapsed_ms: 0,
            progress_percent: 0.0,
            current_section: 0,
        }
    }

    /// Whether the run reached the end.
    pub fn is_finished(&self) -> bool {
        self.progress_percent >= 100.0
    }

    /// Derive the transport phase.
    pub fn phase(&self) -> Phase {
        if self.is_playing {
            Phase::Playing
        } else if self.is_finished() {
            Phase::Finished
        } else if self.progress_percent == 0.0 {
            Phase::Idle
        } else {
            Phase::Paused
        }
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new()
    }
}

/// UI-only state of the terminal session.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Whether help overlay is visible
    pub show_help: bool,
    /// True when screen needs to be redrawn
    pub needs_render: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            show_help: false,
            needs_render: true,
        }
    }

    /// Toggle help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.needs_render = true;
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_has_correct_defaults() {
        let state = PlaybackState::new();

        assert!(!state.is_playing);
        assert_eq!(state.elapsed_ms, 0);
        assert_eq!(state.progress_percent, 0.0);
        assert_eq!(state.current_section, 0);
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn phase_is_derived_from_fields() {
        let mut state = PlaybackState::new();

        state.is_playing = true;
        assert_eq!(state.phase(), Phase::Playing);

        state.is_playing = false;
        state.elapsed_ms = 500;
        state.progress_percent = 12.5;
        assert_eq!(state.phase(), Phase::Paused);

        state.progress_percent = 100.0;
        assert_eq!(state.phase(), Phase::Finished);
        assert!(state.is_finished());
    }

    #[test]
    fn any_progress_is_not_idle() {
        let mut state = PlaybackState::new();
        state.progress_percent = 0.001;
        assert_eq!(state.elapsed_ms, 0);
        assert_eq!(state.phase(), Phase::Paused);
    }

    #[test]
    fn action_label_follows_phase() {
        assert_eq!(Phase::Idle.action_label(), "play");
        assert_eq!(Phase::Paused.action_label(), "play");
        assert_eq!(Phase::Playing.action_label(), "pause");
        assert_eq!(Phase::Finished.action_label(), "replay");
    }

    #[test]
    fn toggle_help_flips_and_requests_render() {
        let mut view = ViewState::new();
        view.needs_render = false;

        view.toggle_help();
        assert!(view.show_help);
        assert!(view.needs_render);

        view.toggle_help();
        assert!(!view.show_help);
    }

    #[test]
    fn input_result_enum_variants() {
        assert_eq!(InputResult::Continue, InputResult::Continue);
        assert_ne!(InputResult::Quit, InputResult::Continue);
    }
}
