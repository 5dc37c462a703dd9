//! Help overlay rendering for the slideshow player.
//!
//! Displays a centered modal with all available keyboard shortcuts.

use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::Theme;

/// Help text lines for the help overlay.
pub const HELP_LINES: &[&str] = &[
    "",
    "  Playback",
    "    Space/Enter  Play / Pause / Replay",
    "    r/Home       Reset to the beginning",
    "",
    "  Sections",
    "    n/Right      Next section",
    "    p/Left       Previous section",
    "",
    "  General",
    "    ?            Show this help",
    "    q/Esc        Quit player",
    "",
    "       Press any key to close",
];

/// Width of the help box including borders.
pub const HELP_BOX_WIDTH: u16 = 44;

/// Compute the centered modal area, shrunk to fit small terminals.
pub fn help_modal_rect(area: Rect) -> Rect {
    let width = HELP_BOX_WIDTH.min(area.width);
    let height = (HELP_LINES.len() as u16 + 2).min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Render the help overlay on top of whatever is already drawn.
pub fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let modal = help_modal_rect(area);
    frame.render_widget(Clear, modal);

    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|l| Line::styled(*l, theme.text_style()))
        .collect();
    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.accent_style())
            .title(" Help "),
    );
    frame.render_widget(help, modal);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_lines_cover_transport_keys() {
        assert!(HELP_LINES.iter().any(|l| l.contains("Space") && l.contains("Play")));
        assert!(HELP_LINES.iter().any(|l| l.contains("Reset")));
        assert!(HELP_LINES.iter().any(|l| l.contains("Next section")));
        assert!(HELP_LINES.iter().any(|l| l.contains("Quit")));
    }

    #[test]
    fn help_lines_fit_in_box() {
        for line in HELP_LINES {
            assert!(line.chars().count() <= (HELP_BOX_WIDTH - 2) as usize, "{:?}", line);
        }
    }

    #[test]
    fn modal_is_centered() {
        let modal = help_modal_rect(Rect::new(0, 0, 100, 40));
        assert_eq!(modal.width, HELP_BOX_WIDTH);
        assert_eq!(modal.x, (100 - HELP_BOX_WIDTH) / 2);
        assert_eq!(modal.height, HELP_LINES.len() as u16 + 2);
    }

    #[test]
    fn modal_shrinks_on_small_terminal() {
        let modal = help_modal_rect(Rect::new(0, 0, 20, 5));
        assert_eq!(modal.width, 20);
        assert_eq!(modal.height, 5);
        assert_eq!(modal.x, 0);
        assert_eq!(modal.y, 0);
    }
}
