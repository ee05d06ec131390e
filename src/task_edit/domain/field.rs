//! Patchable task field names and their fixed history order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A patchable task field.
///
/// [`TaskField::ALL`] fixes the order history rows are emitted in,
/// independent of patch key order, so change trails are reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskField {
    /// Task title.
    Title,
    /// Task description.
    Description,
    /// Workflow status.
    Status,
    /// Priority level.
    Priority,
    /// Work-item kind.
    #[serde(rename = "type")]
    Kind,
    /// Assigned user.
    Assignee,
    /// Owning sprint.
    Sprint,
    /// Due date.
    DueDate,
    /// Story point estimate.
    StoryPoints,
}

impl TaskField {
    /// All patchable fields in history emission order.
    pub const ALL: [Self; 9] = [
        Self::Title,
        Self::Description,
        Self::Status,
        Self::Priority,
        Self::Kind,
        Self::Assignee,
        Self::Sprint,
        Self::DueDate,
        Self::StoryPoints,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Status => "status",
            Self::Priority => "priority",
            Self::Kind => "type",
            Self::Assignee => "assignee",
            Self::Sprint => "sprint",
            Self::DueDate => "due_date",
            Self::StoryPoints => "story_points",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
