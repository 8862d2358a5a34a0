// Rust guideline compliant 2026-10-13

//! Search entry point and the disambiguation contract.
//!
//! When resolution yields several participants, a [`Picker`] chooses one (or
//! cancels). The choice is then resolved again by its organisation id so
//! the final record always comes from the identifier tier.

use crate::resolve::{resolve, resolve_exact};
use crate::{Error, Participant, Result};
use tracing::{debug, warn};

/// A user's answer to the disambiguation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Zero-based position in the candidate list.
    Index(usize),
    /// The user declined to choose.
    Cancel,
}

/// Rejected disambiguation input. Recovered by prompting again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSelection {
    /// A number outside `1..=max`.
    #[error("selection {input} is out of range 1-{max}")]
    OutOfRange {
        /// The number as typed.
        input: String,
        /// Number of candidates.
        max: usize,
    },

    /// Neither a number nor the cancel key.
    #[error("'{0}' is not a number")]
    NotANumber(String),
}

/// Obtains a single selection from an ordered list of candidates.
pub trait Picker {
    /// Presents `candidates` and returns the chosen one or a cancellation.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt itself fails (e.g. IO).
    fn pick(&mut self, candidates: &[&Participant]) -> Result<Selection>;
}

/// Final outcome of a search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<'a> {
    /// The resolved records (normally exactly one).
    Found(Vec<&'a Participant>),
    /// The user cancelled disambiguation.
    Cancelled,
}

/// Parses a disambiguation answer.
///
/// # Arguments
///
/// * `input` - Raw line typed by the user
/// * `count` - Number of candidates shown
///
/// # Returns
///
/// `Selection::Cancel` for `q`, otherwise the zero-based index of a
/// 1-based choice.
///
/// # Errors
///
/// Returns an error if the input is not a number or is out of range.
pub fn parse_selection(input: &str, count: usize) -> std::result::Result<Selection, InvalidSelection> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("q") {
        return Ok(Selection::Cancel);
    }

    let choice: i64 = input
        .parse()
        .map_err(|_| InvalidSelection::NotANumber(input.to_string()))?;

    if choice < 1 || choice as u64 > count as u64 {
        return Err(InvalidSelection::OutOfRange {
            input: input.to_string(),
            max: count,
        });
    }

    Ok(Selection::Index(choice as usize - 1))
}

/// Resolves a search term to a single participant, asking `picker` when
/// the term is ambiguous.
///
/// # Arguments
///
/// * `records` - The full directory snapshot
/// * `term` - Search term (must not be empty)
/// * `picker` - Interactive picker consulted for multiple matches
///
/// # Returns
///
/// The resolved records, or `SearchOutcome::Cancelled`.
///
/// # Errors
///
/// Returns an error if:
/// - The term is empty
/// - Nothing matched (`Error::NoMatch`)
/// - The picker fails
pub fn search<'a>(
    records: &'a [Participant],
    term: &str,
    picker: &mut dyn Picker,
) -> Result<SearchOutcome<'a>> {
    if term.is_empty() {
        return Err(Error::InvalidInput("search term cannot be empty".to_string()));
    }

    let matches = resolve(records, term);
    match matches.len() {
        0 => Err(Error::NoMatch(term.to_string())),
        1 => Ok(SearchOutcome::Found(matches)),
        count => {
            debug!(count, "asking picker to disambiguate");
            loop {
                match picker.pick(&matches)? {
                    Selection::Cancel => return Ok(SearchOutcome::Cancelled),
                    Selection::Index(index) if index < count => {
                        let selected = matches[index];
                        let Some(id) = selected.organisation_id.as_deref() else {
                            warn!("selected participant has no organisation id");
                            return Ok(SearchOutcome::Found(vec![selected]));
                        };
                        return Ok(SearchOutcome::Found(resolve_exact(records, id)));
                    }
                    Selection::Index(index) => {
                        warn!(index, count, "picker returned an out-of-range selection");
                    }
                }
            }
        }
    }
}
