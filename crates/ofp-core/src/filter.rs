// Rust guideline compliant 2026-10-14

//! Role and Authorization Server filters over a resolved working set.

use crate::{AuthorisationServer, Participant, Role};

/// Keeps the participants holding at least one claim for `role`.
///
/// Order is preserved.
pub fn filter_by_role<'a, I>(participants: I, role: Role) -> Vec<&'a Participant>
where
    I: IntoIterator<Item = &'a Participant>,
{
    participants
        .into_iter()
        .filter(|participant| participant.has_role(role))
        .collect()
}

/// Finds the first participant owning the Authorization Server `server_id`.
///
/// # Returns
///
/// The owning participant and the server, or `None`.
pub fn find_auth_server<'a, I>(
    participants: I,
    server_id: &str,
) -> Option<(&'a Participant, &'a AuthorisationServer)>
where
    I: IntoIterator<Item = &'a Participant>,
{
    participants.into_iter().find_map(|participant| {
        participant
            .auth_server(server_id)
            .map(|server| (participant, server))
    })
}
