// Rust guideline compliant 2026-10-15

//! Tests for the lookup pipeline with scripted input and captured output.

use ofp_cli::commands::show::{execute, Outcome, ShowOptions};
use ofp_cli::{JsonFormatter, OutputFormatter, TableFormatter};
use ofp_core::{parse_participants, DirectorySource, Error, Participant, Role};
use std::io::Cursor;

struct FixtureSource;

impl DirectorySource for FixtureSource {
    fn name(&self) -> String {
        "fixture".to_string()
    }

    fn fetch(&self) -> ofp_core::Result<Vec<Participant>> {
        parse_participants(include_str!("fixtures/participants.json"))
    }
}

struct BrokenSource;

impl DirectorySource for BrokenSource {
    fn name(&self) -> String {
        "broken".to_string()
    }

    fn fetch(&self) -> ofp_core::Result<Vec<Participant>> {
        Err(Error::SourceUnavailable {
            source_name: self.name(),
            reason: "connection refused".to_string(),
        })
    }
}

struct Run {
    result: anyhow::Result<Outcome>,
    stdout: String,
    stderr: String,
}

fn run_with(
    options: ShowOptions,
    source: &dyn DirectorySource,
    formatter: &dyn OutputFormatter,
    stdin: &str,
) -> Run {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let result = execute(
        &options,
        source,
        formatter,
        Cursor::new(stdin),
        &mut stdout,
        &mut stderr,
    );
    Run {
        result,
        stdout: String::from_utf8(stdout).unwrap(),
        stderr: String::from_utf8(stderr).unwrap(),
    }
}

fn run(options: ShowOptions, stdin: &str) -> Run {
    run_with(options, &FixtureSource, &TableFormatter::new(false), stdin)
}

fn core_error(run: &Run) -> &Error {
    run.result
        .as_ref()
        .unwrap_err()
        .downcast_ref::<Error>()
        .expect("expected a core error")
}

#[test]
fn test_search_exact_prints_single_participant() {
    let run = run(
        ShowOptions {
            search: Some("22222222".to_string()),
            ..ShowOptions::default()
        },
        "",
    );
    assert_eq!(run.result.unwrap(), Outcome::Printed);
    assert!(run.stdout.contains("Banco Beta"));
    assert!(!run.stdout.contains("Banco Alpha"));
    assert!(!run.stdout.contains("Found the following matches"));
}

#[test]
fn test_fuzzy_search_with_selection() {
    let run = run(
        ShowOptions {
            search: Some("inter".to_string()),
            ..ShowOptions::default()
        },
        "2\n",
    );
    assert_eq!(run.result.unwrap(), Outcome::Printed);
    assert!(run.stdout.contains("Found the following matches:"));
    assert!(run.stdout.contains("INTER SEGUROS S.A."));
    assert!(run.stdout.ends_with("\n"));
    let details = run.stdout.split("Organization Details").nth(1).unwrap();
    assert!(details.contains("d4e5f6a7-0000-4000-8000-000000000004"));
}

#[test]
fn test_fuzzy_search_cancelled() {
    let run = run(
        ShowOptions {
            search: Some("inter".to_string()),
            ..ShowOptions::default()
        },
        "q\n",
    );
    assert_eq!(run.result.unwrap(), Outcome::Cancelled);
    assert!(!run.stdout.contains("Organization Details"));
}

#[test]
fn test_search_without_match_fails() {
    let run = run(
        ShowOptions {
            search: Some("zzzqqq".to_string()),
            ..ShowOptions::default()
        },
        "",
    );
    assert!(matches!(core_error(&run), Error::NoMatch(term) if term == "zzzqqq"));
}

#[test]
fn test_auth_server_table_details() {
    let run = run(
        ShowOptions {
            auth_server: Some("srv-alpha-1".to_string()),
            ..ShowOptions::default()
        },
        "",
    );
    assert_eq!(run.result.unwrap(), Outcome::Printed);
    assert!(run.stdout.contains("Banco Alpha"));
    assert!(run.stdout.contains("Authorization Server Details"));
    assert!(run.stderr.is_empty(), "no confirmation when filtered");
}

#[test]
fn test_auth_server_json_prints_only_server() {
    let run = run_with(
        ShowOptions {
            auth_server: Some("srv-alpha-1".to_string()),
            json: true,
            ..ShowOptions::default()
        },
        &FixtureSource,
        &JsonFormatter,
        "",
    );
    assert_eq!(run.result.unwrap(), Outcome::Printed);
    let value: serde_json::Value = serde_json::from_str(&run.stdout).unwrap();
    assert_eq!(value["CustomerFriendlyName"], "Alpha Conta");
}

#[test]
fn test_auth_server_outside_search_result_not_found() {
    let run = run(
        ShowOptions {
            search: Some("Banco Beta".to_string()),
            auth_server: Some("srv-alpha-1".to_string()),
            ..ShowOptions::default()
        },
        "",
    );
    let error = core_error(&run);
    assert_eq!(
        error.to_string(),
        "Authorization Server ID 'srv-alpha-1' not found"
    );
}

#[test]
fn test_role_filter() {
    let run = run_with(
        ShowOptions {
            role: Some(Role::Pagto),
            json: true,
            ..ShowOptions::default()
        },
        &FixtureSource,
        &JsonFormatter,
        "",
    );
    assert_eq!(run.result.unwrap(), Outcome::Printed);
    let value: serde_json::Value = serde_json::from_str(&run.stdout).unwrap();
    let names: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["OrganisationName"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Banco Alpha", "Inter Pagamentos"]);
}

#[test]
fn test_role_filter_without_holders_fails() {
    let run = run(
        ShowOptions {
            role: Some(Role::Invfii),
            ..ShowOptions::default()
        },
        "",
    );
    assert_eq!(
        core_error(&run).to_string(),
        "No participants found with role=INVFII"
    );
}

#[test]
fn test_unfiltered_asks_for_confirmation() {
    let declined = run(ShowOptions::default(), "n\n");
    assert_eq!(declined.result.unwrap(), Outcome::Declined);
    assert!(declined
        .stderr
        .contains("You are about to print information for 4 participants."));
    assert!(declined.stderr.contains("Do you want to continue? [y/N]"));
    assert!(declined.stdout.is_empty());

    let accepted = run(ShowOptions::default(), "y\n");
    assert_eq!(accepted.result.unwrap(), Outcome::Printed);
    assert_eq!(accepted.stdout.matches("Organization Details").count(), 4);
}

#[test]
fn test_unfiltered_json_skips_confirmation() {
    let run = run_with(
        ShowOptions {
            json: true,
            ..ShowOptions::default()
        },
        &FixtureSource,
        &JsonFormatter,
        "",
    );
    assert_eq!(run.result.unwrap(), Outcome::Printed);
    assert!(run.stderr.is_empty());
}

#[test]
fn test_fetch_failure_is_reported() {
    let run = run_with(
        ShowOptions::default(),
        &BrokenSource,
        &TableFormatter::new(false),
        "",
    );
    let error = run.result.unwrap_err();
    let message = format!("{:#}", error);
    assert!(message.starts_with("Error fetching data: "), "{message}");
    assert!(message.contains("connection refused"));
    assert!(matches!(
        error.downcast_ref::<Error>(),
        Some(Error::SourceUnavailable { .. })
    ));
}
