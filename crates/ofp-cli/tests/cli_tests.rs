// Rust guideline compliant 2026-10-15

//! End-to-end tests running the `ofp` binary against a directory snapshot.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/participants.json")
}

fn ofp(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_ofp"))
        .arg("--directory-file")
        .arg(fixture_path())
        .args(args)
        .env_remove("OFP_DIRECTORY_URL")
        .env_remove("OFP_DIRECTORY_FILE")
        .env_remove("OFP_OUTPUT_FORMAT")
        .env_remove("OFP_LOG_LEVEL")
        .env_remove("OFP_TIMEOUT_SECS")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("run ofp");

    if let Some(mut pipe) = child.stdin.take() {
        // The process may exit before reading everything.
        let _ = pipe.write_all(stdin.as_bytes());
    }
    child.wait_with_output().expect("wait for ofp")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn ofp_search_by_id_outputs_json() {
    let output = ofp(
        &["--search", "a1b2c3d4-0000-4000-8000-000000000001", "--json"],
        "",
    );
    assert!(
        output.status.success(),
        "expected success, got status: {:?}\nstderr: {}",
        output.status.code(),
        stderr(&output)
    );

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("JSON output");
    let records = value.as_array().expect("JSON array");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["OrganisationName"], "Banco Alpha");
}

#[test]
fn ofp_misspelled_search_resolves_by_fuzzy_match() {
    let output = ofp(&["--search", "Banc Alfa"], "");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("BANCO ALPHA S.A."));
}

#[test]
fn ofp_search_without_match_exits_with_failure() {
    let output = ofp(&["--search", "zzzqqq"], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("No matches found for: zzzqqq"));
}

#[test]
fn ofp_ambiguous_search_cancel_exits_cleanly() {
    let output = ofp(&["--search", "inter"], "q\n");
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Found the following matches:"));
    assert!(!out.contains("Organization Details"));
}

#[test]
fn ofp_ambiguous_search_selects_candidate() {
    let output = ofp(&["--search", "inter", "--no-color"], "7\n1\n");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Invalid selection. Please try again."));
    assert!(out.contains("c3d4e5f6-0000-4000-8000-000000000003"));
}

#[test]
fn ofp_unknown_auth_server_fails() {
    let output = ofp(&["--auth-server", "srv-missing"], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Authorization Server ID 'srv-missing' not found"));
}

#[test]
fn ofp_auth_server_json_prints_server() {
    let output = ofp(&["--auth-server", "srv-alpha-1", "--json"], "");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("JSON output");
    assert_eq!(value["AuthorisationServerId"], "srv-alpha-1");
}

#[test]
fn ofp_role_is_case_insensitive() {
    let output = ofp(&["--role", "conta", "--json"], "");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("JSON output");
    assert_eq!(value.as_array().map(Vec::len), Some(1));
}

#[test]
fn ofp_unknown_role_rejected_by_parser() {
    let output = ofp(&["--role", "BANCO"], "");
    assert!(!output.status.success());
    assert!(stderr(&output).contains("BANCO"));
}

#[test]
fn ofp_role_without_holders_fails() {
    let output = ofp(&["--role", "INVFII"], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("No participants found with role=INVFII"));
}

#[test]
fn ofp_unfiltered_listing_can_be_declined() {
    let output = ofp(&[], "n\n");
    assert!(output.status.success());
    assert!(stderr(&output).contains("You are about to print information for 4 participants."));
    assert!(stdout(&output).is_empty());
}

#[test]
fn ofp_missing_snapshot_reports_fetch_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_ofp"))
        .args(["--directory-file", "/nonexistent/participants.json", "--json"])
        .env_remove("OFP_OUTPUT_FORMAT")
        .env_remove("OFP_LOG_LEVEL")
        .output()
        .expect("run ofp");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error fetching data"));
}
