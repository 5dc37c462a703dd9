//! Rendering components for the slideshow player.
//!
//! This module contains all the UI rendering functions for the player:
//! slide content, progress bar, section indicators, status bar and the
//! help overlay. Rendering reads the controller, it never mutates it.

mod help;
mod progress;
mod slide;
mod status;

pub use help::{help_modal_rect, render_help, HELP_BOX_WIDTH, HELP_LINES};
pub use progress::{build_progress_bar_chars, build_progress_line, format_duration, render_progress_bar};
pub use slide::{build_slide_lines, render_slide, top_padding};
pub use status::{
    build_indicator_line, build_status_line, render_indicators, render_status_bar,
    section_indicators, Indicator,
};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::player::clock::Clock;
use crate::player::controller::Player;
use crate::player::state::ViewState;
use crate::theme::Theme;

/// Number of chrome rows below the slide (progress + indicators + status).
pub const CHROME_LINES: u16 = 3;

/// Split the frame into slide, progress, indicator and status areas.
pub fn frame_layout(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// Draw one full frame for the player's current state.
pub fn render_frame<C: Clock>(
    frame: &mut Frame,
    player: &Player<C>,
    view: &ViewState,
    theme: &Theme,
) {
    let area = frame.area();
    let [slide_area, progress_area, indicator_area, status_area] = frame_layout(area);

    let deck = player.deck();
    let state = player.state();
    let current = state.current_section;

    if let Some(section) = deck.get(current) {
        render_slide(frame, slide_area, section, theme);
    }

    let boundaries: Vec<u64> = (1..deck.len()).map(|i| deck.section_start(i)).collect();
    render_progress_bar(
        frame,
        progress_area,
        state.elapsed_ms,
        deck.total_ms(),
        &boundaries,
        theme,
    );
    render_indicators(frame, indicator_area, deck.len(), current, theme);

    let section_id = deck.get(current).map(|s| s.id.as_str()).unwrap_or("");
    render_status_bar(
        frame,
        status_area,
        player.phase(),
        current,
        deck.len(),
        section_id,
        theme,
    );

    if view.show_help {
        render_help(frame, area, theme);
    }
}
