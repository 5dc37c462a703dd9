//! Status bar and section indicator rendering for the slideshow player.
//!
//! Displays the transport state, the active section and keyboard shortcuts,
//! plus one indicator dot per section.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::player::state::Phase;
use crate::theme::Theme;

/// Display state of one section indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    /// Section already shown
    Past,
    /// Section on screen
    Current,
    /// Section still to come
    Upcoming,
}

/// Classify every section relative to the active one.
pub fn section_indicators(count: usize, current: usize) -> Vec<Indicator> {
    (0..count)
        .map(|idx| match idx.cmp(&current) {
            std::cmp::Ordering::Less => Indicator::Past,
            std::cmp::Ordering::Equal => Indicator::Current,
            std::cmp::Ordering::Greater => Indicator::Upcoming,
        })
        .collect()
}

/// Build the indicator row, one dot per section (`● ● ◉ ○ ○`).
pub fn build_indicator_line(count: usize, current: usize, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::with_capacity(count * 2);
    for (i, indicator) in section_indicators(count, current).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let span = match indicator {
            Indicator::Past => Span::styled("●", Style::default().fg(theme.bar_filled)),
            Indicator::Current => Span::styled("◉", theme.accent_bold_style()),
            Indicator::Upcoming => Span::styled("○", Style::default().fg(theme.bar_empty)),
        };
        spans.push(span);
    }
    Line::from(spans)
}

/// Build the status/controls line.
///
/// # Arguments
/// * `phase` - Current transport phase
/// * `current` - Active section index
/// * `count` - Number of sections
/// * `section_id` - Identifier of the active section
/// * `theme` - Colors to use
pub fn build_status_line(
    phase: Phase,
    current: usize,
    count: usize,
    section_id: &str,
    theme: &Theme,
) -> Line<'static> {
    let icon = match phase {
        Phase::Playing => "⏸ ",
        Phase::Finished => "↺ ",
        Phase::Idle | Phase::Paused => "▶ ",
    };
    let phase_label = match phase {
        Phase::Idle => "ready",
        Phase::Playing => "playing",
        Phase::Paused => "paused",
        Phase::Finished => "finished",
    };

    let mut spans = vec![
        Span::styled(format!(" {}", icon), theme.accent_bold_style()),
        Span::styled(format!("{} ", phase_label), theme.text_style()),
        Span::styled(
            format!("{}/{} ", current + 1, count),
            theme.text_secondary_style(),
        ),
        Span::styled(section_id.to_string(), theme.highlight_style()),
        Span::styled(" │ ", theme.text_secondary_style()),
    ];

    let keys: [(&str, &str); 5] = [
        ("space", phase.action_label()),
        ("n/p", "section"),
        ("r", "reset"),
        ("?", "help"),
        ("q", "quit"),
    ];
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(key.to_string(), theme.accent_style()));
        spans.push(Span::styled(format!(":{}", desc), theme.text_secondary_style()));
    }

    Line::from(spans)
}

/// Render the indicator row centered in `area`.
pub fn render_indicators(frame: &mut Frame, area: Rect, count: usize, current: usize, theme: &Theme) {
    let line = build_indicator_line(count, current, theme);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// Render the status bar in `area`.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    phase: Phase,
    current: usize,
    count: usize,
    section_id: &str,
    theme: &Theme,
) {
    let line = build_status_line(phase, current, count, section_id, theme);
    frame.render_widget(Paragraph::new(line), area);
}
