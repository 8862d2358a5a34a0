// Rust guideline compliant 2026-10-14

//! ofp Core Library
//!
//! This crate provides the foundational components for inspecting the
//! Open Finance Brasil participant directory:
//! - Data models (Participant, RoleClaim, AuthorisationServer, ApiResource)
//! - Role codes
//! - Participant resolution (exact identifier tiers, fuzzy ranking)
//! - Disambiguation contract and search entry point
//! - Role and Authorization Server filters
//! - Directory sources (HTTP, JSON snapshot)
//! - Configuration and error types

pub mod config;
pub mod directory;
pub mod disambiguate;
pub mod error;
pub mod filter;
pub mod models;
pub mod resolve;
pub mod role;
pub mod similarity;

pub use config::{Config, OutputFormat};
pub use directory::{parse_participants, DirectorySource, FileDirectory, HttpDirectory};
pub use disambiguate::{parse_selection, search, InvalidSelection, Picker, SearchOutcome, Selection};
pub use error::{Error, Result};
pub use filter::{filter_by_role, find_auth_server};
pub use models::{ApiDiscoveryEndpoint, ApiResource, AuthorisationServer, Participant, RoleClaim};
pub use resolve::{rank_fuzzy, resolve, resolve_exact, resolve_fuzzy, IdentifierField, MatchCandidate};
pub use role::Role;
