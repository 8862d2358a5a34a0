// Rust guideline compliant 2026-10-14

//! Directory sources.
//!
//! A [`DirectorySource`] yields the full participant snapshot. The live
//! source is the public Open Finance Brasil directory over HTTP; a file
//! source reads a previously saved snapshot for offline use.

use crate::{Error, Participant, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Public participants endpoint of the Open Finance Brasil directory.
pub const DEFAULT_DIRECTORY_URL: &str =
    "https://data.directory.openbankingbrasil.org.br/participants";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const USER_AGENT: &str = concat!("ofp/", env!("CARGO_PKG_VERSION"));

/// Supplies the full list of participant records.
pub trait DirectorySource {
    /// Short description of where the records come from, used in errors.
    fn name(&self) -> String;

    /// Fetches the full snapshot.
    ///
    /// # Errors
    ///
    /// Returns `Error::SourceUnavailable` if the records cannot be obtained
    /// or decoded. Fetches are not retried.
    fn fetch(&self) -> Result<Vec<Participant>>;
}

/// Decodes a directory snapshot.
///
/// # Errors
///
/// Returns `Error::Json` if the text is not a JSON array of participants.
pub fn parse_participants(text: &str) -> Result<Vec<Participant>> {
    let participants: Vec<Participant> = serde_json::from_str(text)?;
    Ok(participants)
}

/// Live directory reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpDirectory {
    url: String,
    timeout: Duration,
}

impl HttpDirectory {
    /// Creates a source for `url` with the given request timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }

    /// The endpoint this source fetches.
    pub fn url(&self) -> &str {
        &self.url
    }

    fn unavailable(&self, reason: impl ToString) -> Error {
        Error::SourceUnavailable {
            source_name: self.name(),
            reason: reason.to_string(),
        }
    }
}

impl Default for HttpDirectory {
    fn default() -> Self {
        Self::new(
            DEFAULT_DIRECTORY_URL,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }
}

impl DirectorySource for HttpDirectory {
    fn name(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<Vec<Participant>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| self.unavailable(e))?;

        debug!(url = %self.url, "fetching directory");
        let response = client
            .get(&self.url)
            .send()
            .map_err(|e| self.unavailable(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.unavailable(format!("HTTP {}", status)));
        }

        let body = response.text().map_err(|e| self.unavailable(e))?;
        let participants = parse_participants(&body).map_err(|e| self.unavailable(e))?;
        debug!(participants = participants.len(), "directory fetched");
        Ok(participants)
    }
}

/// Directory snapshot stored as a JSON file.
#[derive(Debug, Clone)]
pub struct FileDirectory {
    path: PathBuf,
}

impl FileDirectory {
    /// Creates a source reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DirectorySource for FileDirectory {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<Vec<Participant>> {
        let unavailable = |reason: String| Error::SourceUnavailable {
            source_name: self.name(),
            reason,
        };

        let text = std::fs::read_to_string(&self.path).map_err(|e| unavailable(e.to_string()))?;
        let participants = parse_participants(&text).map_err(|e| unavailable(e.to_string()))?;
        debug!(
            path = %self.path.display(),
            participants = participants.len(),
            "directory snapshot loaded"
        );
        Ok(participants)
    }
}
