//! Input handling for the slideshow player.
//!
//! This module handles terminal input events, dispatching
//! them to the appropriate handlers and returning control flow signals.

mod keyboard;

pub use keyboard::handle_key_event;

use crossterm::event::Event;

use crate::player::clock::Clock;
use crate::player::controller::Player;
use crate::player::state::{InputResult, ViewState};

/// Handle any input event, dispatching to the appropriate handler.
///
/// # Arguments
/// * `event` - The crossterm event to handle
/// * `player` - The slideshow controller
/// * `view` - UI-only state (help overlay, redraw flag)
///
/// # Returns
/// `InputResult` indicating whether to continue or quit
pub fn handle_event<C: Clock>(
    event: Event,
    player: &mut Player<C>,
    view: &mut ViewState,
) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, player, view),
        Event::Resize(_, _) => {
            view.needs_render = true;
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore focus, mouse and paste events
    }
}
