//! Free-text to canonical-ID entity resolution.
//!
//! A conversational caller names things by label: "assign the login bug to
//! Sam", "move it into SprintIQ Web". This module maps such free text to
//! canonical identifiers within the caller's authorization scope. Candidates
//! come from an injected store, pre-filtered by substring (with a tokenized
//! fallback), then ranked by bigram Dice similarity; user lookups add
//! contact and exact-match bonuses. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
