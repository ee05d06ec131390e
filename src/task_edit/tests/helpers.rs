//! Shared fixtures for task editing tests.

use chrono::{TimeZone, Utc};

use crate::access::domain::{ProjectId, WorkspaceId};
use crate::task_edit::domain::{TaskId, TaskKind, TaskPriority, TaskSnapshot, TaskStatus};

/// Builds a todo-state snapshot with fixed timestamps and no optional
/// fields set.
pub fn todo_snapshot(workspace_id: WorkspaceId, project_id: ProjectId) -> TaskSnapshot {
    let created_at = Utc
        .with_ymd_and_hms(2024, 3, 1, 9, 0, 0)
        .single()
        .expect("valid timestamp");
    TaskSnapshot {
        id: TaskId::new(),
        project_id,
        workspace_id,
        title: "Fix login redirect loop".to_owned(),
        description: None,
        status: TaskStatus::Todo,
        priority: TaskPriority::Medium,
        kind: TaskKind::Bug,
        assignee_id: None,
        sprint_id: None,
        due_date: None,
        story_points: None,
        created_at,
        updated_at: created_at,
    }
}
