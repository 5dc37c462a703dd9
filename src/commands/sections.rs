//! Sections command handler
//!
//! Prints the deck timeline: where each section starts and how long it
//! stays on screen.

use anyhow::{Context, Result};
use serde::Serialize;

use explainer::cli::{SectionsArgs, SectionsFormat};
use explainer::deck::Deck;
use explainer::player::render::format_duration;
use explainer::theme::Theme;
use explainer::Config;

use super::deck_path;

/// One row of the timeline.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TimelineRow {
    pub index: usize,
    pub id: String,
    pub title: String,
    pub start_ms: u64,
    pub duration_ms: u64,
}

/// Timeline of a whole deck.
#[derive(Debug, Serialize)]
pub struct Timeline {
    pub sections: Vec<TimelineRow>,
    pub total_ms: u64,
}

impl Timeline {
    pub fn from_deck(deck: &Deck) -> Self {
        let sections = deck
            .sections()
            .iter()
            .enumerate()
            .map(|(index, s)| TimelineRow {
                index,
                id: s.id.clone(),
                title: s.title.clone(),
                start_ms: deck.section_start(index),
                duration_ms: s.duration_ms,
            })
            .collect();
        Self {
            sections,
            total_ms: deck.total_ms(),
        }
    }
}

/// Render the timeline as an aligned table.
pub fn format_table(timeline: &Timeline, theme: &Theme) -> String {
    let id_width = timeline
        .sections
        .iter()
        .map(|r| r.id.chars().count())
        .max()
        .unwrap_or(0)
        .max(2);

    let mut out = String::new();
    out.push_str(&theme.secondary_text(&format!(
        "{:>3}  {:<id_width$}  {:>5}  {:>8}  title",
        "#", "id", "start", "duration"
    )));
    out.push('\n');

    for row in &timeline.sections {
        out.push_str(&format!(
            "{:>3}  {}  {:>5}  {:>7.1}s  {}\n",
            row.index + 1,
            theme.accent_text(&format!("{:<id_width$}", row.id)),
            format_duration(row.start_ms),
            row.duration_ms as f64 / 1000.0,
            row.title
        ));
    }

    out.push_str(&format!(
        "Total: {} sections, {}",
        timeline.sections.len(),
        format_duration(timeline.total_ms)
    ));
    out
}

/// Print the timeline of the selected deck.
pub fn handle(config: &Config, args: SectionsArgs) -> Result<()> {
    let path = deck_path(args.deck, config);
    let deck = Deck::load_or_builtin(path.as_deref()).context("Failed to load deck")?;

    match args.format {
        SectionsFormat::Table => {
            let timeline = Timeline::from_deck(&deck);
            println!("{}", format_table(&timeline, &config.theme()));
        }
        SectionsFormat::Json => {
            let timeline = Timeline::from_deck(&deck);
            println!("{}", serde_json::to_string_pretty(&timeline)?);
        }
        SectionsFormat::Toml => {
            print!("{}", deck.to_toml_string()?);
        }
    }
    Ok(())
}
