//! Elapsed-time to section mapping.
//!
//! Sections are laid out back to back on a single timeline. A section owns
//! the half-open interval `[start, start + duration)`, so the boundary
//! instant belongs to the following section.

use super::Section;

/// Resolve the active section index for an elapsed time.
///
/// Scans sections in order, accumulating durations, and returns the first
/// index whose cumulative upper bound exceeds `elapsed_ms`. Once the elapsed
/// time reaches the end of the timeline the last index is returned, so the
/// result is always a valid index for a non-empty slice.
///
/// # Arguments
/// * `elapsed_ms` - Elapsed playback time in milliseconds
/// * `sections` - Ordered section sequence
///
/// # Returns
/// The active section index (0 for an empty slice)
pub fn resolve(elapsed_ms: u64, sections: &[Section]) -> usize {
    let mut accumulated = 0u64;
    for (idx, section) in sections.iter().enumerate() {
        accumulated = accumulated.saturating_add(section.duration_ms);
        if elapsed_ms < accumulated {
            return idx;
        }
    }
    sections.len().saturating_sub(1)
}

/// Cumulative start offset of the section at `index`, in milliseconds.
///
/// Indices past the end are clamped to the last section.
pub fn section_start(index: usize, sections: &[Section]) -> u64 {
    let index = index.min(sections.len().saturating_sub(1));
    sections[..index]
        .iter()
        .fold(0u64, |acc, s| acc.saturating_add(s.duration_ms))
}

/// Sum of all section durations, in milliseconds.
pub fn total_duration_ms(sections: &[Section]) -> u64 {
    sections
        .iter()
        .fold(0u64, |acc, s| acc.saturating_add(s.duration_ms))
}
