// Rust guideline compliant 2026-10-15

//! Unit tests for error types and messages.
//!
//! The messages are what the `ofp` binary prints, so their wording is checked
//! verbatim where the command line depends on it.

use ofp_core::{Error, Role};

#[test]
fn test_no_match_formatting() {
    let error = Error::NoMatch("Banco Gama".to_string());
    assert_eq!(error.to_string(), "No matches found for: Banco Gama");
    assert!(error.is_no_match());
}

#[test]
fn test_auth_server_not_found_formatting() {
    let error = Error::AuthServerNotFound("srv-404".to_string());
    assert_eq!(
        error.to_string(),
        "Authorization Server ID 'srv-404' not found"
    );
    assert!(!error.is_no_match());
}

#[test]
fn test_no_role_match_formatting() {
    let error = Error::NoRoleMatch("INVFII".to_string());
    assert_eq!(error.to_string(), "No participants found with role=INVFII");
}

#[test]
fn test_source_unavailable_formatting() {
    let error = Error::SourceUnavailable {
        source_name: "https://directory.example/participants".to_string(),
        reason: "HTTP 503 Service Unavailable".to_string(),
    };
    let msg = error.to_string();
    assert!(
        msg.contains("https://directory.example/participants"),
        "Should name the source"
    );
    assert!(msg.contains("HTTP 503"), "Should preserve the reason");
}

#[test]
fn test_invalid_role_lists_valid_codes() {
    let error = "BOGUS".parse::<Role>().unwrap_err();
    let msg = error.to_string();
    assert!(msg.starts_with("Invalid role: BOGUS"));
    assert!(msg.contains("CONTA"), "Should list valid codes");
    assert!(msg.contains("INVFII"), "Should list valid codes");
}

#[test]
fn test_io_error_formatting() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = Error::from(io_err);
    assert!(
        error.to_string().contains("IO error"),
        "IO error should contain 'IO error' prefix"
    );
}

#[test]
fn test_json_error_formatting() {
    let json_err = serde_json::from_str::<serde_json::Value>("invalid json")
        .expect_err("Should fail to parse invalid JSON");
    let error = Error::Json(json_err);
    assert!(
        error.to_string().contains("JSON error"),
        "JSON error should contain 'JSON error' prefix"
    );
}

#[test]
fn test_every_error_exits_with_failure() {
    let errors = vec![
        Error::NoMatch("x".to_string()),
        Error::AuthServerNotFound("x".to_string()),
        Error::NoRoleMatch("DADOS".to_string()),
        Error::InvalidInput("x".to_string()),
        Error::InvalidConfig("x".to_string()),
    ];
    for error in errors {
        assert_eq!(error.exit_code(), 1, "{error} should exit with 1");
    }
}

#[test]
fn test_error_messages_are_single_line() {
    let error = Error::InvalidConfig("timeout_secs must be greater than 0".to_string());
    let msg = error.to_string();
    assert!(!msg.contains('\n'), "Error message should be single line");
    assert_eq!(msg, "Invalid config: timeout_secs must be greater than 0");
}
