// Rust guideline compliant 2026-10-13

//! Participant resolution: exact identifier lookup with a fuzzy fallback.
//!
//! Exact lookup walks [`UNIQUE_FIELDS`] in order, then the nested
//! Authorization Server id, and stops at the first tier with any match.
//! Fuzzy ranking only runs when every exact tier misses.

use crate::similarity::partial_ratio;
use crate::Participant;
use std::fmt;
use tracing::{debug, warn};

/// Strict lower bound (`>`) on organisation/legal name scores.
pub const NAME_THRESHOLD: u8 = 75;

/// Inclusive lower bound (`>=`) on description scores.
pub const DESCRIPTION_THRESHOLD: u8 = 90;

/// Maximum number of fuzzy candidates returned.
pub const MAX_FUZZY_RESULTS: usize = 10;

/// A nominally unique identifier that exact lookup matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierField {
    OrganisationId,
    OrganisationName,
    RegistrationNumber,
    RegistrationId,
    AuthorisationServerId,
}

/// Top-level identifier tiers, in precedence order.
pub const UNIQUE_FIELDS: [IdentifierField; 4] = [
    IdentifierField::OrganisationId,
    IdentifierField::OrganisationName,
    IdentifierField::RegistrationNumber,
    IdentifierField::RegistrationId,
];

impl IdentifierField {
    /// Directory JSON key of the field.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            IdentifierField::OrganisationId => "OrganisationId",
            IdentifierField::OrganisationName => "OrganisationName",
            IdentifierField::RegistrationNumber => "RegistrationNumber",
            IdentifierField::RegistrationId => "RegistrationId",
            IdentifierField::AuthorisationServerId => "AuthorisationServerId",
        }
    }

    /// Human label of the field.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            IdentifierField::OrganisationId => "Organization ID",
            IdentifierField::OrganisationName => "Organization Name",
            IdentifierField::RegistrationNumber => "Registration Number (CNPJ)",
            IdentifierField::RegistrationId => "Registration ID (ISPB)",
            IdentifierField::AuthorisationServerId => "Authorization Server ID",
        }
    }

    /// Returns true if the participant's field equals `term` exactly.
    ///
    /// A missing field never matches.
    #[must_use]
    pub fn matches(self, participant: &Participant, term: &str) -> bool {
        let value = match self {
            IdentifierField::OrganisationId => &participant.organisation_id,
            IdentifierField::OrganisationName => &participant.organisation_name,
            IdentifierField::RegistrationNumber => &participant.registration_number,
            IdentifierField::RegistrationId => &participant.registration_id,
            IdentifierField::AuthorisationServerId => {
                return participant.auth_server(term).is_some();
            }
        };
        value.as_deref() == Some(term)
    }
}

impl fmt::Display for IdentifierField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A participant scored by fuzzy ranking.
#[derive(Debug, Clone, Copy)]
pub struct MatchCandidate<'a> {
    pub participant: &'a Participant,
    pub score: u8,
}

/// Resolves `term` against the unique identifier tiers.
///
/// Returns every record matching the first tier that matches anything, in
/// record order. More than one match on a tier is a directory data-quality
/// anomaly: it is logged as a warning and all matches are returned.
///
/// # Arguments
///
/// * `records` - The full directory snapshot
/// * `term` - Exact, case-sensitive search term
///
/// # Returns
///
/// The matching records, or an empty list if no tier matched.
pub fn resolve_exact<'a>(records: &'a [Participant], term: &str) -> Vec<&'a Participant> {
    let tiers = UNIQUE_FIELDS
        .iter()
        .copied()
        .chain(std::iter::once(IdentifierField::AuthorisationServerId));

    for field in tiers {
        let matches: Vec<&Participant> = records
            .iter()
            .filter(|participant| field.matches(participant, term))
            .collect();

        if matches.is_empty() {
            continue;
        }

        if matches.len() > 1 {
            warn!(
                field = field.key(),
                term,
                matches = matches.len(),
                "Found multiple participants with {}={}. This should not happen.",
                field.label(),
                term
            );
        }
        debug!(field = field.key(), matches = matches.len(), "exact tier matched");
        return matches;
    }

    Vec::new()
}

/// Scores every record against `term` and keeps the best candidates.
///
/// A record qualifies when its organisation or legal name scores above
/// [`NAME_THRESHOLD`] or one of its server descriptions reaches
/// [`DESCRIPTION_THRESHOLD`]. Its score is the highest of the three.
/// Descriptions are scanned in order and the scan stops at the first one
/// reaching the description threshold, so a later, better description
/// does not raise the score.
///
/// # Returns
///
/// At most [`MAX_FUZZY_RESULTS`] candidates, best first; ties keep record
/// order.
pub fn rank_fuzzy<'a>(records: &'a [Participant], term: &str) -> Vec<MatchCandidate<'a>> {
    let term = term.to_lowercase();

    let mut candidates: Vec<MatchCandidate<'a>> = records
        .iter()
        .filter_map(|participant| score_participant(participant, &term))
        .collect();

    debug!(candidates = candidates.len(), "fuzzy ranking complete");

    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates.truncate(MAX_FUZZY_RESULTS);
    candidates
}

/// Fuzzy fallback: the records of [`rank_fuzzy`], best first.
pub fn resolve_fuzzy<'a>(records: &'a [Participant], term: &str) -> Vec<&'a Participant> {
    rank_fuzzy(records, term)
        .into_iter()
        .map(|candidate| candidate.participant)
        .collect()
}

/// Exact resolution, falling back to fuzzy ranking on a total miss.
pub fn resolve<'a>(records: &'a [Participant], term: &str) -> Vec<&'a Participant> {
    let exact = resolve_exact(records, term);
    if !exact.is_empty() {
        return exact;
    }
    resolve_fuzzy(records, term)
}

fn score_participant<'a>(participant: &'a Participant, term: &str) -> Option<MatchCandidate<'a>> {
    let name_score = partial_ratio(term, &participant.name().to_lowercase());
    let legal_score = partial_ratio(term, &participant.legal_name().to_lowercase());

    let mut desc_score = 0;
    let descriptions = participant
        .authorisation_servers
        .iter()
        .filter_map(|server| server.customer_friendly_description.as_deref())
        .filter(|description| !description.is_empty());
    for description in descriptions {
        desc_score = desc_score.max(partial_ratio(term, &description.to_lowercase()));
        if desc_score >= DESCRIPTION_THRESHOLD {
            break;
        }
    }

    let qualifies = name_score > NAME_THRESHOLD
        || legal_score > NAME_THRESHOLD
        || desc_score >= DESCRIPTION_THRESHOLD;

    qualifies.then(|| MatchCandidate {
        participant,
        score: name_score.max(legal_score).max(desc_score),
    })
}
