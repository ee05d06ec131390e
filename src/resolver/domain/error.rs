//! Error types for resolution query validation and parsing.

use thiserror::Error;

/// Errors returned while constructing resolution queries.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolverDomainError {
    /// The query text is empty after trimming.
    #[error("query text must not be blank")]
    BlankQuery,

    /// The scope context lacks the boundary the entity kind requires.
    #[error("{kind} lookups require a {required} scope")]
    MissingScope {
        /// The entity kind being resolved.
        kind: super::EntityKind,
        /// The scope boundary that must be present.
        required: &'static str,
    },
}

/// Error returned while parsing entity kinds from transport input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unsupported entity kind: {0}")]
pub struct ParseEntityKindError(pub String);
