//! Progress bar rendering for the slideshow player.
//!
//! Displays playback progress with section boundary markers and an
//! elapsed/total time readout.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::Theme;

/// Format a duration in milliseconds to MM:SS format.
///
/// # Arguments
/// * `ms` - Duration in milliseconds
///
/// # Returns
/// A string in MM:SS format
pub fn format_duration(ms: u64) -> String {
    let total_secs = ms / 1000;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Build the progress bar character array.
///
/// Creates a visual representation of the progress bar including
/// the playhead position and section boundary markers.
///
/// # Arguments
/// * `bar_width` - Width of the bar in characters
/// * `elapsed_ms` - Current playback time
/// * `total_ms` - Total duration of the deck
/// * `boundaries` - Start offsets of every section after the first
///
/// # Returns
/// A tuple of (bar_chars, filled_count) where bar_chars contains the visual
/// representation and filled_count is the number of filled positions.
pub fn build_progress_bar_chars(
    bar_width: usize,
    elapsed_ms: u64,
    total_ms: u64,
    boundaries: &[u64],
) -> (Vec<char>, usize) {
    let progress = if total_ms > 0 {
        (elapsed_ms as f64 / total_ms as f64).clamp(0.0, 1.0)
    } else {
        1.0
    };

    let filled = (bar_width as f64 * progress) as usize;

    let mut bar: Vec<char> = vec!['─'; bar_width];

    if filled < bar_width {
        bar[filled] = '●';
    }

    for &boundary in boundaries {
        let pos = if total_ms > 0 {
            ((boundary as f64 / total_ms as f64) * bar_width as f64) as usize
        } else {
            0
        };
        if pos < bar_width && bar[pos] != '●' {
            bar[pos] = '┼';
        }
    }

    (bar, filled)
}

/// Build the styled progress line: bar followed by ` MM:SS/MM:SS`.
pub fn build_progress_line(
    width: u16,
    elapsed_ms: u64,
    total_ms: u64,
    boundaries: &[u64],
    theme: &Theme,
) -> Line<'static> {
    let time_display = format!(
        " {}/{}",
        format_duration(elapsed_ms),
        format_duration(total_ms)
    );
    // Leading pad + time readout
    let bar_width = (width as usize).saturating_sub(1 + time_display.chars().count());
    let (bar, filled) = build_progress_bar_chars(bar_width, elapsed_ms, total_ms, boundaries);

    let filled_style = Style::default().fg(theme.bar_filled);
    let empty_style = Style::default().fg(theme.bar_empty);

    let mut spans = Vec::with_capacity(bar_width + 2);
    spans.push(Span::raw(" "));
    for (i, &c) in bar.iter().enumerate() {
        let span = if i < filled {
            let c = if c == '┼' { '┿' } else { '━' };
            Span::styled(c.to_string(), filled_style)
        } else if i == filled {
            Span::styled(c.to_string(), theme.accent_bold_style())
        } else {
            Span::styled(c.to_string(), empty_style)
        };
        spans.push(span);
    }
    spans.push(Span::styled(time_display, theme.text_secondary_style()));

    Line::from(spans)
}

/// Render the progress bar into a one-row area.
pub fn render_progress_bar(
    frame: &mut Frame,
    area: Rect,
    elapsed_ms: u64,
    total_ms: u64,
    boundaries: &[u64],
    theme: &Theme,
) {
    let line = build_progress_line(area.width, elapsed_ms, total_ms, boundaries, theme);
    frame.render_widget(Paragraph::new(line), area);
}
