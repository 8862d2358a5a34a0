// Rust guideline compliant 2026-10-12

//! Error types for the ofp core library.

use thiserror::Error;

/// Result type alias for ofp operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for directory loading and participant resolution.
#[derive(Debug, Error)]
pub enum Error {
    /// The directory could not be fetched or decoded.
    #[error("Directory unavailable ({source_name}): {reason}")]
    SourceUnavailable {
        /// Where the directory was being read from (URL or file path).
        source_name: String,
        /// Transport or decoding failure description.
        reason: String,
    },

    /// Neither exact nor fuzzy resolution found a participant.
    #[error("No matches found for: {0}")]
    NoMatch(String),

    /// No participant owns the requested Authorization Server.
    #[error("Authorization Server ID '{0}' not found")]
    AuthServerNotFound(String),

    /// The role filter removed every participant.
    #[error("No participants found with role={0}")]
    NoRoleMatch(String),

    /// A role code outside the closed enumeration.
    #[error("Invalid role: {0} (expected one of {1})")]
    InvalidRole(String, String),

    /// Invalid caller input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid configuration file or override.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the process exit status for this error.
    ///
    /// Every error is a failure; a cancelled disambiguation is not an
    /// error and never reaches this mapping.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Returns true when the error is the "not found" condition of a search.
    #[must_use]
    pub fn is_no_match(&self) -> bool {
        matches!(self, Error::NoMatch(_))
    }
}
