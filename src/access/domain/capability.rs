//! Capability tokens granted within an authorization scope.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named permission granted by role or explicit assignment within a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// View tasks and project metadata.
    View,
    /// Comment on tasks.
    Comment,
    /// Edit task fields.
    Edit,
    /// Administer the scope itself.
    Admin,
}

impl Capability {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Comment => "comment",
            Self::Edit => "edit",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
