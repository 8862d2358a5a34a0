// Rust guideline compliant 2026-10-15

//! Tracing subscriber setup for the `ofp` binary.
//!
//! Events go to stderr so they never mix with table or JSON output.

use anyhow::{bail, Result};
use tracing::Level;
use tracing_subscriber::fmt;

/// Parses a log level name (case-insensitive).
///
/// # Errors
///
/// Returns an error for anything other than error, warn, info, debug or trace.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => bail!("Invalid log level: {}", other),
    }
}

/// Installs the global subscriber.
///
/// A subscriber installed earlier (e.g. by a test harness) is left in place.
///
/// # Errors
///
/// Returns an error if `level` is not a known level.
pub fn init_tracing(level: &str, json: bool) -> Result<()> {
    let level = parse_log_level(level)?;

    if json {
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    } else {
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    Ok(())
}
