//! Slide content rendering.
//!
//! A slide is a pure function of the active section: headline, optional
//! subtitle, bullet lines and a closing note, centered in the content area.

use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::deck::Section;
use crate::theme::Theme;

/// Build the text lines of a slide.
pub fn build_slide_lines(section: &Section, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(section.lines.len() + 6);

    lines.push(Line::from(Span::styled(
        section.title.clone(),
        theme.accent_bold_style(),
    )));

    if let Some(subtitle) = &section.subtitle {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            subtitle.clone(),
            theme.highlight_style(),
        )));
    }

    if !section.lines.is_empty() {
        lines.push(Line::default());
        for item in &section.lines {
            lines.push(Line::from(vec![
                Span::styled("• ", theme.highlight_style()),
                Span::styled(item.clone(), theme.text_style()),
            ]));
        }
    }

    if let Some(note) = &section.note {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            note.clone(),
            theme.text_secondary_style().add_modifier(Modifier::ITALIC),
        )));
    }

    lines
}

/// Rows to leave above the content so it sits vertically centered.
pub fn top_padding(area_height: u16, content_height: usize) -> u16 {
    (area_height as usize).saturating_sub(content_height) as u16 / 2
}

/// Render `section` into `area`, framed and centered.
pub fn render_slide(frame: &mut Frame, area: Rect, section: &Section, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.text_secondary_style())
        .title(Span::styled(format!(" {} ", section.id), theme.accent_style()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = build_slide_lines(section, theme);
    let padding = top_padding(inner.height, lines.len());
    let mut padded = vec![Line::default(); padding as usize];
    padded.append(&mut lines);

    let paragraph = Paragraph::new(padded)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}
