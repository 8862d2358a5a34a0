// Rust guideline compliant 2026-10-12

//! Role codes a participant can claim in the Open Finance directory.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Regulated role a participant is authorized to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Account holder.
    Conta,
    /// Data transmitter/receiver.
    Dados,
    /// Payment initiator.
    Pagto,
    /// Correspondent.
    Ccorr,
    /// Credit card.
    Cdtcar,
    /// Financing.
    Cdtfin,
    /// Personal loans.
    Cdtpes,
    /// Revolving credit.
    Cdtrov,
    /// Real-estate credit.
    Cdtimb,
    /// Investment credit.
    Cdtinv,
    /// Working-capital credit.
    Cdtcap,
    /// Guaranteed credit.
    Cdtgcr,
    /// Fixed-income securities.
    Invtit,
    /// Investment funds.
    Invfun,
    /// Real-estate receivables.
    Invcri,
    /// Agribusiness receivables.
    Invcra,
    /// Debentures.
    Invdeb,
    /// Shares.
    Invacoe,
    /// Derivatives.
    Invder,
    /// Pension plans.
    Invprev,
    /// Capitalization bonds.
    Invcap,
    /// Real-estate funds.
    Invfii,
}

impl Role {
    /// Every role code, in directory order.
    pub const ALL: [Role; 22] = [
        Role::Conta,
        Role::Dados,
        Role::Pagto,
        Role::Ccorr,
        Role::Cdtcar,
        Role::Cdtfin,
        Role::Cdtpes,
        Role::Cdtrov,
        Role::Cdtimb,
        Role::Cdtinv,
        Role::Cdtcap,
        Role::Cdtgcr,
        Role::Invtit,
        Role::Invfun,
        Role::Invcri,
        Role::Invcra,
        Role::Invdeb,
        Role::Invacoe,
        Role::Invder,
        Role::Invprev,
        Role::Invcap,
        Role::Invfii,
    ];

    /// Returns the canonical code as published by the directory.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Conta => "CONTA",
            Role::Dados => "DADOS",
            Role::Pagto => "PAGTO",
            Role::Ccorr => "CCORR",
            Role::Cdtcar => "CDTCAR",
            Role::Cdtfin => "CDTFIN",
            Role::Cdtpes => "CDTPES",
            Role::Cdtrov => "CDTROV",
            Role::Cdtimb => "CDTIMB",
            Role::Cdtinv => "CDTINV",
            Role::Cdtcap => "CDTCAP",
            Role::Cdtgcr => "CDTGCR",
            Role::Invtit => "INVTIT",
            Role::Invfun => "INVFUN",
            Role::Invcri => "INVCRI",
            Role::Invcra => "INVCRA",
            Role::Invdeb => "INVDEB",
            Role::Invacoe => "INVACOE",
            Role::Invder => "INVDER",
            Role::Invprev => "INVPREV",
            Role::Invcap => "INVCAP",
            Role::Invfii => "INVFII",
        }
    }

    /// Comma-separated list of every valid code, for error messages.
    #[must_use]
    pub fn valid_codes() -> String {
        Role::ALL
            .iter()
            .map(|role| role.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    /// Parses a role code, ignoring ASCII case.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|role| role.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| Error::InvalidRole(value.to_string(), Role::valid_codes()))
    }
}
