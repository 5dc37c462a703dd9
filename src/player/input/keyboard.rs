//! Keyboard input handling for the slideshow player.
//!
//! Maps keys to transport actions (play/pause/replay, reset, section
//! navigation), the help overlay, and quitting.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::player::clock::Clock;
use crate::player::controller::Player;
use crate::player::state::{InputResult, ViewState};

/// Handle a keyboard event.
///
/// This is the main keyboard input handler that processes all key events
/// and updates state or returns control flow signals.
pub fn handle_key_event<C: Clock>(
    key: KeyEvent,
    player: &mut Player<C>,
    view: &mut ViewState,
) -> InputResult {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    // If help is showing, any key closes it
    if view.show_help {
        view.show_help = false;
        view.needs_render = true;
        return InputResult::Continue;
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        // === Help ===
        KeyCode::Char('?') => {
            view.toggle_help();
            InputResult::Continue
        }

        // === Transport ===
        KeyCode::Char(' ') | KeyCode::Enter => {
            player.play_pause();
            view.needs_render = true;
            InputResult::Continue
        }
        KeyCode::Char('r') | KeyCode::Home => {
            player.reset();
            view.needs_render = true;
            InputResult::Continue
        }

        // === Section navigation ===
        KeyCode::Char('n') | KeyCode::Right => {
            player.next_section();
            view.needs_render = true;
            InputResult::Continue
        }
        KeyCode::Char('p') | KeyCode::Left => {
            player.previous_section();
            view.needs_render = true;
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}
