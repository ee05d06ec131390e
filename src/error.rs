//! Coarse error taxonomy shared by the service layer.
//!
//! Transport wrappers upstream map each service error onto one of these
//! kinds; the kinds deliberately mirror common RPC status families.

/// Classification of a service-level failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input: blank query, no-op patch, null in a required field.
    InvalidArgument,
    /// The referenced task does not exist, or a user search has no scope.
    NotFound,
    /// The actor is authenticated but lacks the required capability.
    PermissionDenied,
    /// Reserved for optimistic concurrency; never constructed today.
    Conflict,
    /// Unexpected collaborator failure, propagated unchanged.
    Internal,
}

impl ErrorKind {
    /// Returns the canonical string form for logging and transport mapping.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid_argument",
            Self::NotFound => "not_found",
            Self::PermissionDenied => "permission_denied",
            Self::Conflict => "conflict",
            Self::Internal => "internal",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
