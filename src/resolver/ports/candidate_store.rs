//! Candidate store port for scoped entity lookup.

use crate::access::domain::ScopeContext;
use crate::resolver::domain::EntityKind;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for candidate store operations.
pub type CandidateStoreResult<T> = Result<T, CandidateStoreError>;

/// An unscored candidate row returned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRow {
    /// Canonical identifier of the entity.
    pub id: uuid::Uuid,
    /// Display label (project name, task title, or user full name).
    pub label: String,
    /// Identifying contact string for user rows (e-mail), `None` otherwise.
    pub contact: Option<String>,
}

impl CandidateRow {
    /// Creates a labelled row without contact information.
    #[must_use]
    pub const fn new(id: uuid::Uuid, label: String) -> Self {
        Self {
            id,
            label,
            contact: None,
        }
    }

    /// Sets the identifying contact string.
    #[must_use]
    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = Some(contact.into());
        self
    }
}

/// Pre-filter predicate applied by the store before scoring.
///
/// All matching is case-insensitive; how the store implements it (SQL
/// `ILIKE`, index scan, linear filter) is its own concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelPredicate {
    /// The label contains the needle as a substring.
    Contains(String),
    /// The label contains every token.
    AllTokens(Vec<String>),
    /// Given and family name fields each contain their part. Only user rows
    /// carry split name fields; other kinds yield no rows.
    NameParts {
        /// Needle for the given-name field.
        given: String,
        /// Needle for the family-name field.
        family: String,
    },
}

/// Scoped candidate lookup contract.
#[async_trait]
pub trait CandidateStore: Send + Sync {
    /// Returns up to `limit` rows of `kind` visible within `scope` whose
    /// labels satisfy `predicate`.
    ///
    /// A scope containing no entities yields an empty vector, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`CandidateStoreError::Backend`] when the underlying lookup
    /// fails.
    async fn find_candidates(
        &self,
        kind: EntityKind,
        scope: &ScopeContext,
        predicate: &LabelPredicate,
        limit: usize,
    ) -> CandidateStoreResult<Vec<CandidateRow>>;
}

/// Errors returned by candidate store implementations.
#[derive(Debug, Clone, Error)]
pub enum CandidateStoreError {
    /// Storage-layer failure.
    #[error("candidate lookup failed: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl CandidateStoreError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
