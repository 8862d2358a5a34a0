// Rust guideline compliant 2026-10-15

//! Implementation of the `ofp` participant lookup.
//!
//! Fetches the directory, narrows it by search term, Authorization Server
//! or role, and prints what is left.

use crate::picker::TerminalPicker;
use crate::terminal::confirm;
use crate::OutputFormatter;
use anyhow::{Context, Result};
use ofp_core::{
    filter_by_role, find_auth_server, search, DirectorySource, Error, Participant, Role,
    SearchOutcome,
};
use std::io::{BufRead, Write};
use tracing::debug;

/// Filters requested on the command line.
#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    /// Identifier or approximate name to search for.
    pub search: Option<String>,
    /// Keep only participants claiming this role.
    pub role: Option<Role>,
    /// Show this Authorization Server in detail.
    pub auth_server: Option<String>,
    /// Print raw JSON.
    pub json: bool,
}

impl ShowOptions {
    fn has_filters(&self) -> bool {
        self.search.is_some() || self.role.is_some() || self.auth_server.is_some()
    }
}

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Results were printed.
    Printed,
    /// The user cancelled disambiguation.
    Cancelled,
    /// The user declined to print the unfiltered directory.
    Declined,
}

/// Runs the lookup pipeline.
///
/// # Arguments
///
/// * `options` - Filters from the command line
/// * `source` - Where the directory comes from
/// * `formatter` - Presenter for results and candidate lists
/// * `input` - Answers to interactive prompts
/// * `out` - Results and the disambiguation prompt
/// * `err` - Warnings and the confirmation prompt
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be fetched
/// - The search term matches nothing
/// - The Authorization Server is not in the working set
/// - No participant holds the requested role
/// - Reading input or writing output fails
pub fn execute<R: BufRead, W: Write, E: Write>(
    options: &ShowOptions,
    source: &dyn DirectorySource,
    formatter: &dyn OutputFormatter,
    mut input: R,
    mut out: W,
    mut err: E,
) -> Result<Outcome> {
    let records = source.fetch().context("Error fetching data")?;
    debug!(participants = records.len(), "directory loaded");

    let mut working: Vec<&Participant> = records.iter().collect();

    if let Some(term) = &options.search {
        let mut picker = TerminalPicker::new(&mut input, &mut out, formatter);
        match search(&records, term, &mut picker)? {
            SearchOutcome::Found(found) => working = found,
            SearchOutcome::Cancelled => return Ok(Outcome::Cancelled),
        }
    }

    if let Some(server_id) = &options.auth_server {
        let (owner, server) = find_auth_server(working.iter().copied(), server_id)
            .ok_or_else(|| Error::AuthServerNotFound(server_id.clone()))?;

        let rendered = if options.json {
            formatter.format_auth_server(server)
        } else {
            formatter.format_participant(owner, Some(server_id))
        };
        writeln!(out, "{}", rendered)?;
        return Ok(Outcome::Printed);
    }

    if let Some(role) = options.role {
        working = filter_by_role(working, role);
        if working.is_empty() {
            return Err(Error::NoRoleMatch(role.to_string()).into());
        }
    }

    if !options.has_filters() && !options.json {
        warn_unfiltered(&mut err, working.len())?;
        if !confirm(&mut input, &mut err, "\nDo you want to continue?")? {
            return Ok(Outcome::Declined);
        }
        writeln!(err)?;
    }

    writeln!(out, "{}", formatter.format_list(&working))?;
    Ok(Outcome::Printed)
}

fn warn_unfiltered(err: &mut dyn Write, count: usize) -> std::io::Result<()> {
    writeln!(
        err,
        "\nWarning: You are about to print information for {} participants.",
        count
    )?;
    writeln!(err, "This will generate a lot of output.")?;
    writeln!(err, "\nConsider using filters to narrow down the results:")?;
    writeln!(
        err,
        "  • Search by organization name/ID or registration number/ID: ofp --search <term>"
    )?;
    writeln!(err, "  • Filter by role: ofp --role <ROLE>")?;
    writeln!(err, "  • Get specific auth server: ofp --auth-server <ID>")
}
