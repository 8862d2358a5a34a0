// Rust guideline compliant 2026-10-15

//! Command implementations for the ofp CLI.

pub mod show;
