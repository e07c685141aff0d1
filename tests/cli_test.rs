/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary and never reach the network: searches
/// either fail validation or point at an unroutable API base.
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use prospect_finder::history::{FileStore, HistoryStore};
use prospect_finder::models::{Prospect, SearchRequest, SearchResult};
use tempfile::TempDir;

fn cli(data_dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_prospect-finder"));
    cmd.env("PROSPECTOR_DATA_DIR", data_dir.path())
        .env_remove("GEMINI_API_KEY")
        .env_remove("API_KEY")
        .env_remove("PROSPECTOR_LAT")
        .env_remove("PROSPECTOR_LNG")
        .env_remove("RUST_LOG");
    cmd
}

fn seed_history(data_dir: &TempDir, locations: &[&str]) -> Vec<String> {
    let store = HistoryStore::new(FileStore::new(data_dir.path()));
    let result = SearchResult {
        prospects: vec![Prospect { name: "Acme Co".to_string(), ..Prospect::default() }],
        sources: Vec::new(),
    };
    let mut ids = Vec::new();
    for location in locations {
        let request =
            SearchRequest::new(location, Some("Healthcare and Medical"), None, None).unwrap();
        ids.push(store.record(&request, &result)[0].id.clone());
    }
    ids
}

#[test]
fn test_cli_no_command_shows_help_message() {
    let dir = TempDir::new().unwrap();
    cli(&dir).assert().success().stdout(predicate::str::contains("Use --help for usage information"));
}

#[test]
fn test_cli_help_flag() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("segments"))
        .stdout(predicate::str::contains("history"));
}

#[test]
fn test_cli_version_flag() {
    let dir = TempDir::new().unwrap();
    cli(&dir).arg("--version").assert().success().stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_segments_lists_catalog() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .arg("segments")
        .assert()
        .success()
        .stdout(predicate::str::contains("Healthcare and Medical (healthcare)"))
        .stdout(predicate::str::contains("    - Dialysis Centers"));
}

#[test]
fn test_cli_blank_location_rejected_before_config() {
    let dir = TempDir::new().unwrap();
    // No API key is set: the failure must come from validation, not configuration
    cli(&dir)
        .args(["search", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a city, state, or region."))
        .stderr(predicate::str::contains("GEMINI_API_KEY").not());
}

#[test]
fn test_cli_invalid_coordinates_rejected() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["search", "Current Location", "--lat", "123", "--lng", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid coordinates"));
}

#[test]
fn test_cli_search_requires_api_key() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["search", "Baltimore, MD"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GEMINI_API_KEY environment variable not set"));
}

#[test]
fn test_cli_transport_failure_reports_stage() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .env("GEMINI_API_KEY", "test-key")
        .env("PROSPECTOR_API_BASE", "http://127.0.0.1:9")
        .args(["search", "Baltimore, MD"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[✗] AI synthesis"))
        .stderr(predicate::str::contains("failed at: AI synthesis"));

    // Failed searches are not recorded
    cli(&dir).args(["history", "list"]).assert().success().stdout(predicate::str::contains("No saved searches"));
}

#[test]
fn test_cli_history_list_empty() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved searches"));
}

#[test]
fn test_cli_history_list_and_filter() {
    let dir = TempDir::new().unwrap();
    seed_history(&dir, &["Baltimore, MD", "Towson, MD"]);

    cli(&dir)
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Towson, MD · Healthcare and Medical"))
        .stdout(predicate::str::contains("Baltimore, MD · Healthcare and Medical"));

    cli(&dir)
        .args(["history", "list", "--filter", "location:towson"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Towson, MD"))
        .stdout(predicate::str::contains("Baltimore").not());
}

#[test]
fn test_cli_history_invalid_filter() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["history", "list", "--filter", "color:blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid history filter"));
}

#[test]
fn test_cli_history_show_and_delete() {
    let dir = TempDir::new().unwrap();
    let ids = seed_history(&dir, &["Baltimore, MD"]);

    cli(&dir)
        .args(["history", "show", &ids[0]])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme Co"));

    cli(&dir)
        .args(["history", "delete", &ids[0]])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Deleted {}", ids[0])));

    cli(&dir)
        .args(["history", "show", &ids[0]])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No saved search with id"));
}

#[test]
fn test_cli_history_delete_unknown_id() {
    let dir = TempDir::new().unwrap();
    seed_history(&dir, &["Baltimore, MD"]);

    cli(&dir)
        .args(["history", "delete", "does-not-exist"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved search with id does-not-exist"));

    cli(&dir).args(["history", "list"]).assert().success().stdout(predicate::str::contains("Baltimore, MD"));
}

#[test]
fn test_cli_history_clear() {
    let dir = TempDir::new().unwrap();
    seed_history(&dir, &["Baltimore, MD"]);

    cli(&dir).args(["history", "clear"]).assert().success().stdout(predicate::str::contains("History cleared"));
    cli(&dir)
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved searches"));
}
