//! Terminal session and event loop for the slideshow.
//!
//! The loop blocks in `event::poll` for exactly as long as the controller
//! allows (time until the next tick or pending replay), so there is a single
//! cadence source and no busy waiting.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info};

use crate::deck::Deck;
use crate::player::controller::{Player, PlayerOptions};
use crate::player::input::handle_event;
use crate::player::render::render_frame;
use crate::player::state::{InputResult, PlaybackState, ViewState};
use crate::theme::Theme;

/// How long to block for input when nothing is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Options for one slideshow run.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub player: PlayerOptions,
    /// Start playing immediately instead of waiting for Space
    pub autoplay: bool,
    pub theme: Theme,
}

/// Raw mode + alternate screen, restored on drop.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    /// Enter raw mode and the alternate screen.
    ///
    /// Any failure after raw mode is on restores the terminal before
    /// returning.
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            restore_terminal(&mut stdout);
            return Err(e).context("Failed to enter alternate screen");
        }
        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(e) => {
                restore_terminal(&mut io::stdout());
                Err(e).context("Failed to create terminal")
            }
        }
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_terminal(self.terminal.backend_mut());
    }
}

/// Leave raw mode and the alternate screen and show the cursor again.
fn restore_terminal<W: Write>(out: &mut W) {
    // Best effort: nothing sensible to do if restoring fails
    let _ = disable_raw_mode();
    let _ = execute!(out, LeaveAlternateScreen, Show);
}

/// Play `deck` in the terminal until the user quits.
///
/// Returns the playback state at the moment the player was closed.
pub fn run_slideshow(deck: Deck, options: SessionOptions) -> Result<PlaybackState> {
    info!(
        sections = deck.len(),
        total_ms = deck.total_ms(),
        autoplay = options.autoplay,
        "starting slideshow"
    );

    let mut session = TerminalSession::enter()?;
    let mut player = Player::new(deck, options.player);
    let mut view = ViewState::new();

    if options.autoplay {
        player.start();
    }

    loop {
        if player.tick() {
            view.needs_render = true;
        }

        if view.needs_render {
            session
                .terminal()
                .draw(|frame| render_frame(frame, &player, &view, &options.theme))?;
            view.needs_render = false;
        }

        let timeout = player.time_until_next_tick().unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            let ev = event::read()?;
            if handle_event(ev, &mut player, &mut view) == InputResult::Quit {
                debug!("quit requested");
                break;
            }
        }
    }

    let final_state = player.state().clone();
    info!(
        elapsed_ms = final_state.elapsed_ms,
        section = final_state.current_section,
        "slideshow closed"
    );
    Ok(final_state)
}
