//! Slideshow player module
//!
//! Provides the timed, auto-advancing slideshow:
//!
//! - `clock`: time source abstraction (system clock, manual clock for tests)
//! - `ticker`: the single periodic tick schedule
//! - `state`: `PlaybackState`, transport `Phase` and UI-only `ViewState`
//! - `controller`: `Player`, the timer driver and transport state machine
//! - `input/`: keyboard handling
//! - `render/`: slide, progress bar, indicators, status bar, help overlay
//! - `session`: terminal setup/teardown and the event loop
//!
//! # Usage
//!
//! ```no_run
//! use explainer::deck::Deck;
//! use explainer::player::{run_slideshow, SessionOptions, PlayerOptions};
//! use explainer::theme::Theme;
//!
//! let options = SessionOptions {
//!     player: PlayerOptions::default(),
//!     autoplay: true,
//!     theme: Theme::default(),
//! };
//! let state = run_slideshow(Deck::builtin(), options).unwrap();
//! println!("Stopped at {:.0}%", state.progress_percent);
//! ```

pub mod clock;
pub mod controller;
pub(crate) mod input;
pub mod render;
mod session;
pub mod state;
pub mod ticker;

pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{Player, PlayerOptions};
pub use session::{run_slideshow, SessionOptions, TerminalSession};
pub use state::{InputResult, Phase, PlaybackState, ViewState};
pub use ticker::Ticker;
