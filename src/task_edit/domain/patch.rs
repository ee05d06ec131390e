//! Three-state patch fields and the task patch/update types.

use super::{SprintId, TaskField, TaskKind, TaskPriority, TaskStatus};
use crate::access::domain::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field in a partial update: absent, explicitly null, or a value.
///
/// Presence of a key is distinct from its value being null. A missing key
/// deserializes to [`Patch::Absent`] (the field is untouched); an explicit
/// `null` deserializes to [`Patch::Null`] (the field is cleared).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Patch<T> {
    /// The key was not supplied; leave the field untouched.
    Absent,
    /// The key was supplied as null; clear the field.
    Null,
    /// The key was supplied with a value.
    Value(T),
}

impl<T> Patch<T> {
    /// Returns whether the key was not supplied.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns whether the key was supplied, as null or with a value.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        !self.is_absent()
    }

    /// Returns whether the key was supplied as explicit null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the supplied value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }
}

// A derived Default would demand `T: Default`; absence needs no value.
impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Absent | Self::Null => serializer.serialize_none(),
            Self::Value(value) => serializer.serialize_some(value),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Self::Value(value),
            None => Self::Null,
        })
    }
}

/// A caller-supplied partial update to a task.
///
/// Unrecognized keys are dropped at deserialization, never errors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaskPatch {
    /// New title.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub title: Patch<String>,
    /// New description.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub description: Patch<String>,
    /// New workflow status.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub status: Patch<TaskStatus>,
    /// New priority.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub priority: Patch<TaskPriority>,
    /// New work-item kind.
    #[serde(default, rename = "type", skip_serializing_if = "Patch::is_absent")]
    pub kind: Patch<TaskKind>,
    /// New assignee.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub assignee_id: Patch<UserId>,
    /// New owning sprint.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub sprint_id: Patch<SprintId>,
    /// New due date.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub due_date: Patch<DateTime<Utc>>,
    /// New story point estimate.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub story_points: Patch<u32>,
}

impl TaskPatch {
    /// Creates a patch touching nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a specific field key was supplied.
    #[must_use]
    pub const fn has_field(&self, field: TaskField) -> bool {
        match field {
            TaskField::Title => self.title.is_present(),
            TaskField::Description => self.description.is_present(),
            TaskField::Status => self.status.is_present(),
            TaskField::Priority => self.priority.is_present(),
            TaskField::Kind => self.kind.is_present(),
            TaskField::Assignee => self.assignee_id.is_present(),
            TaskField::Sprint => self.sprint_id.is_present(),
            TaskField::DueDate => self.due_date.is_present(),
            TaskField::StoryPoints => self.story_points.is_present(),
        }
    }

    /// Returns the explicitly supplied field keys, in history order.
    #[must_use]
    pub fn requested_fields(&self) -> Vec<TaskField> {
        TaskField::ALL
            .into_iter()
            .filter(|field| self.has_field(*field))
            .collect()
    }

    /// Returns whether no field key was supplied at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requested_fields().is_empty()
    }
}

/// The effective update set the executor persists.
///
/// Identical in shape to [`TaskPatch`] but produced by the executor: it may
/// carry the derived status transition that the caller never requested.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskUpdate {
    /// Title to set.
    pub title: Patch<String>,
    /// Description to set or clear.
    pub description: Patch<String>,
    /// Status to set, possibly derived.
    pub status: Patch<TaskStatus>,
    /// Priority to set.
    pub priority: Patch<TaskPriority>,
    /// Kind to set.
    pub kind: Patch<TaskKind>,
    /// Assignee to set or clear.
    pub assignee_id: Patch<UserId>,
    /// Sprint to set or clear.
    pub sprint_id: Patch<SprintId>,
    /// Due date to set or clear.
    pub due_date: Patch<DateTime<Utc>>,
    /// Story points to set or clear.
    pub story_points: Patch<u32>,
}

impl TaskUpdate {
    /// Returns whether the update touches no field.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_absent()
            && self.description.is_absent()
            && self.status.is_absent()
            && self.priority.is_absent()
            && self.kind.is_absent()
            && self.assignee_id.is_absent()
            && self.sprint_id.is_absent()
            && self.due_date.is_absent()
            && self.story_points.is_absent()
    }
}

impl From<&TaskPatch> for TaskUpdate {
    fn from(patch: &TaskPatch) -> Self {
        Self {
            title: patch.title.clone(),
            description: patch.description.clone(),
            status: patch.status,
            priority: patch.priority,
            kind: patch.kind,
            assignee_id: patch.assignee_id,
            sprint_id: patch.sprint_id,
            due_date: patch.due_date,
            story_points: patch.story_points,
        }
    }
}
