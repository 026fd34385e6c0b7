//! Shared test helpers for the graphql-style crates
//!
//! - `assertions`: formatting helpers for readable snapshots
//! - `fixtures`: schemas reused across crate test suites

pub mod assertions;
pub mod fixtures;
