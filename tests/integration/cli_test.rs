//! Integration tests for the explainer CLI

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::fixtures_dir;

/// explainer command isolated from the user's config.
fn explainer(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("explainer").expect("binary builds");
    cmd.env("EXPLAINER_CONFIG", config_dir.path().join("config.toml"))
        .env("NO_COLOR", "1");
    cmd
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    explainer(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("sections"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_flag_prints_version() {
    let dir = TempDir::new().unwrap();
    explainer(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Sections Tests
// ============================================================================

#[test]
fn sections_prints_builtin_timeline() {
    let dir = TempDir::new().unwrap();
    explainer(&dir)
        .arg("sections")
        .assert()
        .success()
        .stdout(predicate::str::contains("intro"))
        .stdout(predicate::str::contains("impact"))
        .stdout(predicate::str::contains("Total: 5 sections, 00:30"));
}

#[test]
fn sections_json_is_machine_readable() {
    let dir = TempDir::new().unwrap();
    let output = explainer(&dir)
        .args(["sections", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total_ms"], 30_000);
    assert_eq!(value["sections"][3]["id"], "solution");
    assert_eq!(value["sections"][3]["start_ms"], 15_000);
}

#[test]
fn sections_reads_deck_file() {
    let dir = TempDir::new().unwrap();
    let deck = fixtures_dir().join("three_sections.toml");
    explainer(&dir)
        .args(["sections", "--deck"])
        .arg(&deck)
        .assert()
        .success()
        .stdout(predicate::str::contains("wrap-up"))
        .stdout(predicate::str::contains("Total: 3 sections, 00:03"));
}

#[test]
fn sections_toml_output_is_a_loadable_deck() {
    let dir = TempDir::new().unwrap();
    let output = explainer(&dir)
        .args(["sections", "--format", "toml"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    let deck = explainer::Deck::from_toml_str(&text).unwrap();
    assert_eq!(deck, explainer::Deck::builtin());
}

#[test]
fn invalid_deck_fails_with_message() {
    let dir = TempDir::new().unwrap();
    explainer(&dir)
        .args(["sections", "--deck"])
        .arg(fixtures_dir().join("duplicate_ids.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate section id 'same'"));
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn config_path_honors_env() {
    let dir = TempDir::new().unwrap();
    explainer(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_init_writes_defaults_once() {
    let dir = TempDir::new().unwrap();
    explainer(&dir).args(["config", "init"]).assert().success();
    assert!(dir.path().join("config.toml").exists());

    explainer(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    explainer(&dir)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn config_show_prints_effective_values() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[playback]\ntick_interval_ms = 25\n",
    )
    .unwrap();

    explainer(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tick_interval_ms = 25"))
        .stdout(predicate::str::contains("replay_delay_ms = 100"));
}

#[test]
fn completions_generate_for_bash() {
    let dir = TempDir::new().unwrap();
    explainer(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("explainer"));
}

// ============================================================================
// Logging Tests
// ============================================================================

#[test]
fn log_file_receives_tracing_output() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("x.log");
    explainer(&dir)
        .env_remove("EXPLAINER_LOG")
        .arg("--log-file")
        .arg(&log)
        .arg("sections")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 5 sections"))
        .stdout(predicate::str::contains("logging initialized").not())
        .stderr(predicate::str::contains("logging initialized").not());

    let content = std::fs::read_to_string(&log).unwrap();
    assert!(content.contains("logging initialized"));
    assert!(content.contains("INFO"));
    assert!(!content.contains("DEBUG"));
}

#[test]
fn log_filter_comes_from_env() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("x.log");
    explainer(&dir)
        .env("EXPLAINER_LOG", "debug")
        .arg("--log-file")
        .arg(&log)
        .arg("sections")
        .assert()
        .success();

    let content = std::fs::read_to_string(&log).unwrap();
    assert!(content.contains("DEBUG"));
    assert!(content.contains("no config file, using defaults"));
}

#[test]
fn no_log_file_means_no_log_output() {
    let dir = TempDir::new().unwrap();
    explainer(&dir)
        .env("EXPLAINER_LOG", "debug")
        .arg("sections")
        .assert()
        .success()
        .stdout(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::is_empty());
}
