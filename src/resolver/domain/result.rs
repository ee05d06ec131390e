//! Resolution result types.

use super::ResolutionQuery;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scored, request-scoped match for a resolution query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Canonical identifier of the matched entity.
    pub id: Uuid,
    /// Display label the score was computed against.
    pub label: String,
    /// Similarity score; bigram Dice base plus any user-kind bonuses.
    pub score: f64,
}

impl Candidate {
    /// Creates a scored candidate.
    #[must_use]
    pub const fn new(id: Uuid, label: String, score: f64) -> Self {
        Self { id, label, score }
    }
}

/// Outcome of resolving one free-text query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// The query that produced this result.
    pub query: ResolutionQuery,
    /// Highest-ranked candidate, or `None` when nothing matched.
    pub best: Option<Candidate>,
    /// All scored candidates, descending by score.
    pub candidates: Vec<Candidate>,
}
