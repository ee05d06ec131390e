//! Task snapshots and the trimmed post-update view.

use super::{Patch, SprintId, TaskField, TaskId, TaskKind, TaskPriority, TaskStatus, TaskUpdate};
use crate::access::domain::{ProjectId, UserId, WorkspaceId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full state of a task plus its owning project/workspace linkage.
///
/// Snapshots are plain records: the executor loads one before mutating,
/// receives one back from the store after, and the recorder diffs the pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSnapshot {
    /// Task identifier.
    pub id: TaskId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Workspace the owning project belongs to.
    pub workspace_id: WorkspaceId,
    /// Title.
    pub title: String,
    /// Description, if set.
    pub description: Option<String>,
    /// Workflow status.
    pub status: TaskStatus,
    /// Priority level.
    pub priority: TaskPriority,
    /// Work-item kind.
    pub kind: TaskKind,
    /// Assigned user, if any.
    pub assignee_id: Option<UserId>,
    /// Owning sprint, if any.
    pub sprint_id: Option<SprintId>,
    /// Due date, if set.
    pub due_date: Option<DateTime<Utc>>,
    /// Story point estimate, if set.
    pub story_points: Option<u32>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TaskSnapshot {
    /// Applies an effective update set in place, stamping `updated_at`.
    ///
    /// Absent fields are untouched; null fields are cleared. Null on a
    /// required field never reaches this point (the executor validates
    /// first) and is ignored here.
    pub fn apply_update(&mut self, update: &TaskUpdate, updated_at: DateTime<Utc>) {
        if let Patch::Value(title) = &update.title {
            self.title = title.clone();
        }
        match &update.description {
            Patch::Value(description) => self.description = Some(description.clone()),
            Patch::Null => self.description = None,
            Patch::Absent => {}
        }
        if let Patch::Value(status) = update.status {
            self.status = status;
        }
        if let Patch::Value(priority) = update.priority {
            self.priority = priority;
        }
        if let Patch::Value(kind) = update.kind {
            self.kind = kind;
        }
        match update.assignee_id {
            Patch::Value(assignee_id) => self.assignee_id = Some(assignee_id),
            Patch::Null => self.assignee_id = None,
            Patch::Absent => {}
        }
        match update.sprint_id {
            Patch::Value(sprint_id) => self.sprint_id = Some(sprint_id),
            Patch::Null => self.sprint_id = None,
            Patch::Absent => {}
        }
        match update.due_date {
            Patch::Value(due_date) => self.due_date = Some(due_date),
            Patch::Null => self.due_date = None,
            Patch::Absent => {}
        }
        match update.story_points {
            Patch::Value(story_points) => self.story_points = Some(story_points),
            Patch::Null => self.story_points = None,
            Patch::Absent => {}
        }
        self.updated_at = updated_at;
    }

    /// Returns the canonical string form of a field for diffing and history
    /// storage: `None` for absent values, RFC 3339 for dates, the stable
    /// string form for everything else. Never an empty string standing in
    /// for absence.
    #[must_use]
    pub fn canonical_value(&self, field: TaskField) -> Option<String> {
        match field {
            TaskField::Title => Some(self.title.clone()),
            TaskField::Description => self.description.clone(),
            TaskField::Status => Some(self.status.as_str().to_owned()),
            TaskField::Priority => Some(self.priority.as_str().to_owned()),
            TaskField::Kind => Some(self.kind.as_str().to_owned()),
            TaskField::Assignee => self.assignee_id.map(|id| id.to_string()),
            TaskField::Sprint => self.sprint_id.map(|id| id.to_string()),
            TaskField::DueDate => self.due_date.map(|date| date.to_rfc3339()),
            TaskField::StoryPoints => self.story_points.map(|points| points.to_string()),
        }
    }
}

/// Trimmed view of a task returned after a successful patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatedTask {
    /// Task identifier.
    pub id: TaskId,
    /// Title after the update.
    pub title: String,
    /// Status after the update, including any derived transition.
    pub status: TaskStatus,
    /// Priority after the update.
    pub priority: TaskPriority,
    /// Assignee after the update, if any.
    pub assignee_id: Option<UserId>,
}

impl From<&TaskSnapshot> for UpdatedTask {
    fn from(snapshot: &TaskSnapshot) -> Self {
        Self {
            id: snapshot.id,
            title: snapshot.title.clone(),
            status: snapshot.status,
            priority: snapshot.priority,
            assignee_id: snapshot.assignee_id,
        }
    }
}
