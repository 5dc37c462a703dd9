//! Slide deck definition.
//!
//! A deck is the fixed, ordered sequence of sections the player walks
//! through. It is validated once at construction and immutable afterwards:
//!
//! - `builtin`: the default five-section explainer deck
//! - `resolve`: elapsed-time to section index mapping
//!
//! Decks can also be loaded from a TOML file with one `[[sections]]` table
//! per section.

mod builtin;
pub mod resolve;

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use resolve::{resolve, section_start, total_duration_ms};

/// Errors raised while building or loading a deck.
#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("Deck has no sections")]
    Empty,

    #[error("Section '{id}' has a zero duration")]
    ZeroDuration { id: String },

    #[error("Duplicate section id '{id}'")]
    DuplicateId { id: String },

    #[error("Section at position {index} has an empty id")]
    MissingId { index: usize },

    #[error("Failed to read deck file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse deck file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// One timed phase of the slideshow.
///
/// Only `id` and `duration_ms` take part in timing; the remaining fields are
/// display content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Stable identifier (e.g. "intro")
    pub id: String,
    /// How long the section stays on screen, in milliseconds
    pub duration_ms: u64,
    /// Headline shown at the top of the slide
    pub title: String,
    /// Optional line shown under the headline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Body lines, rendered as bullets
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<String>,
    /// Closing remark shown below the bullets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Section {
    /// Create a section with a title and no body content.
    pub fn new(id: impl Into<String>, duration_ms: u64, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            duration_ms,
            title: title.into(),
            subtitle: None,
            lines: Vec::new(),
            note: None,
        }
    }

    /// Set the subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set the body lines.
    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Set the closing note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// On-disk deck layout.
#[derive(Debug, Deserialize, Serialize)]
struct DeckFile {
    sections: Vec<Section>,
}

/// Validated, ordered sequence of sections.
///
/// Guarantees at least one section, unique non-empty ids and positive
/// durations, so every index produced by [`Deck::resolve`] is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    sections: Vec<Section>,
    total_ms: u64,
}

impl Deck {
    /// Build a deck, validating its sections.
    pub fn new(sections: Vec<Section>) -> Result<Self, DeckError> {
        if sections.is_empty() {
            return Err(DeckError::Empty);
        }

        let mut seen = HashSet::with_capacity(sections.len());
        for (index, section) in sections.iter().enumerate() {
            if section.id.trim().is_empty() {
                return Err(DeckError::MissingId { index });
            }
            if section.duration_ms == 0 {
                return Err(DeckError::ZeroDuration {
                    id: section.id.clone(),
                });
            }
            if !seen.insert(section.id.as_str()) {
                return Err(DeckError::DuplicateId {
                    id: section.id.clone(),
                });
            }
        }

        let total_ms = total_duration_ms(&sections);
        Ok(Self { sections, total_ms })
    }

    /// The built-in explainer deck (intro, problem, team, solution, impact).
    pub fn builtin() -> Self {
        let sections = builtin::sections();
        let total_ms = total_duration_ms(&sections);
        Self { sections, total_ms }
    }

    /// Parse a deck from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, DeckError> {
        let file: DeckFile = toml::from_str(content)?;
        Self::new(file.sections)
    }

    /// Load a deck from a TOML file.
    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let content = std::fs::read_to_string(path).map_err(|source| DeckError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load the deck at `path`, or the built-in deck when no path is given.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, DeckError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Serialize the deck back to TOML (used by `config init`).
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&DeckFile {
            sections: self.sections.clone(),
        })
    }

    /// All sections in order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Section at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Number of sections (always at least 1).
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Index of the final section.
    pub fn last_index(&self) -> usize {
        self.sections.len() - 1
    }

    /// Total duration in milliseconds.
    pub fn total_ms(&self) -> u64 {
        self.total_ms
    }

    /// Total duration.
    pub fn total_duration(&self) -> Duration {
        Duration::from_millis(self.total_ms)
    }

    /// Active section index for an elapsed time (clamped to the last index).
    pub fn resolve(&self, elapsed_ms: u64) -> usize {
        resolve(elapsed_ms, &self.sections)
    }

    /// Start offset of the section at `index`, in milliseconds.
    pub fn section_start(&self, index: usize) -> u64 {
        section_start(index, &self.sections)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::builtin()
    }
}
