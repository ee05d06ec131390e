//! Resolution query types.

use super::{ParseEntityKindError, ResolverDomainError};
use crate::access::domain::ScopeContext;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of entity a free-text lookup targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A project within a workspace.
    Project,
    /// A task within a project.
    Task,
    /// A user profile within a workspace.
    User,
}

impl EntityKind {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Task => "task",
            Self::User => "user",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for EntityKind {
    type Error = ParseEntityKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "project" => Ok(Self::Project),
            "task" => Ok(Self::Task),
            "user" => Ok(Self::User),
            _ => Err(ParseEntityKindError(value.to_owned())),
        }
    }
}

/// A validated free-text lookup request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionQuery {
    kind: EntityKind,
    raw_text: String,
    scope: ScopeContext,
    limit: usize,
}

impl ResolutionQuery {
    /// Default number of candidates returned.
    pub const DEFAULT_LIMIT: usize = 10;

    /// Hard ceiling on the number of candidates returned.
    pub const MAX_LIMIT: usize = 20;

    /// Creates a validated query with the default limit.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverDomainError::BlankQuery`] when `raw_text` is empty
    /// after trimming.
    pub fn new(
        kind: EntityKind,
        raw_text: impl Into<String>,
        scope: ScopeContext,
    ) -> Result<Self, ResolverDomainError> {
        let raw_text = raw_text.into();
        if raw_text.trim().is_empty() {
            return Err(ResolverDomainError::BlankQuery);
        }
        Ok(Self {
            kind,
            raw_text,
            scope,
            limit: Self::DEFAULT_LIMIT,
        })
    }

    /// Sets the candidate limit, clamped to `1..=MAX_LIMIT`.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = if limit == 0 {
            1
        } else if limit > Self::MAX_LIMIT {
            Self::MAX_LIMIT
        } else {
            limit
        };
        self
    }

    /// Returns the entity kind being resolved.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Returns the free text being resolved.
    #[must_use]
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Returns the authorization scope of the lookup.
    #[must_use]
    pub const fn scope(&self) -> &ScopeContext {
        &self.scope
    }

    /// Returns the candidate limit.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }
}
