//! Integration tests for deck loading and section resolution

use explainer::deck::{resolve, Deck, DeckError};

use super::helpers::{fixtures_dir, temp_fixture};

#[test]
fn loads_fixture_deck() {
    let (temp_dir, path) = temp_fixture("three_sections.toml");
    let deck = Deck::load(&path).expect("Should load deck from fixture");

    assert_eq!(deck.len(), 3);
    assert_eq!(deck.total_ms(), 3000);
    assert_eq!(deck.sections()[0].lines, vec!["Install", "Configure"]);
    assert_eq!(deck.sections()[1].subtitle.as_deref(), Some("Watch closely"));
    assert_eq!(deck.sections()[2].note.as_deref(), Some("Thanks for watching"));

    drop(temp_dir);
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = Deck::load(&fixtures_dir().join("duplicate_ids.toml")).unwrap_err();
    assert!(matches!(err, DeckError::DuplicateId { ref id } if id == "same"));
}

#[test]
fn missing_file_reports_path() {
    let err = Deck::load(std::path::Path::new("/nonexistent/deck.toml")).unwrap_err();
    assert!(matches!(err, DeckError::Read { .. }));
    assert!(err.to_string().contains("/nonexistent/deck.toml"));
}

#[test]
fn no_path_means_builtin_deck() {
    let deck = Deck::load_or_builtin(None).unwrap();
    assert_eq!(deck, Deck::builtin());
}

#[test]
fn resolve_scenario_from_fixture() {
    let deck = Deck::load(&fixtures_dir().join("three_sections.toml")).unwrap();
    let sections = deck.sections();

    assert_eq!(resolve(500, sections), 0);
    assert_eq!(resolve(1500, sections), 1);
    assert_eq!(resolve(2999, sections), 2);
    assert_eq!(resolve(3000, sections), 2);
}

#[test]
fn builtin_deck_section_boundaries() {
    let deck = Deck::builtin();
    // intro 4s, problem 7s, team 4s, solution 8s, impact 7s
    assert_eq!(deck.resolve(3999), 0);
    assert_eq!(deck.resolve(4000), 1);
    assert_eq!(deck.resolve(10_999), 1);
    assert_eq!(deck.resolve(11_000), 2);
    assert_eq!(deck.resolve(15_000), 3);
    assert_eq!(deck.resolve(23_000), 4);
    assert_eq!(deck.resolve(30_000), 4);
}
