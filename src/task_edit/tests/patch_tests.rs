//! Unit tests for three-state patch fields and snapshot updates.

use chrono::{TimeZone, Utc};
use rstest::rstest;
use serde_json::json;

use super::helpers::todo_snapshot;
use crate::access::domain::{ProjectId, UserId, WorkspaceId};
use crate::task_edit::domain::{Patch, TaskField, TaskPatch, TaskStatus, TaskUpdate};

#[rstest]
fn missing_key_deserializes_to_absent_and_null_to_null() {
    let patch: TaskPatch = serde_json::from_value(json!({
        "title": "New title",
        "description": null
    }))
    .expect("valid patch json");

    assert_eq!(patch.title, Patch::Value("New title".to_owned()));
    assert_eq!(patch.description, Patch::Null);
    assert!(patch.status.is_absent());
    assert!(patch.assignee_id.is_absent());
}

#[rstest]
fn unrecognized_keys_are_ignored_not_errors() {
    let patch: TaskPatch = serde_json::from_value(json!({
        "title": "New title",
        "watchers": ["u1", "u2"],
        "colour": "red"
    }))
    .expect("unknown keys must be dropped");

    assert_eq!(patch.requested_fields(), vec![TaskField::Title]);
}

#[rstest]
fn status_and_kind_parse_from_transport_strings() {
    let patch: TaskPatch = serde_json::from_value(json!({
        "status": "in_progress",
        "type": "bug"
    }))
    .expect("valid patch json");

    assert_eq!(patch.status, Patch::Value(TaskStatus::InProgress));
    assert!(patch.kind.is_present());
}

#[rstest]
fn requested_fields_are_reported_in_fixed_order() {
    let patch: TaskPatch = serde_json::from_value(json!({
        "story_points": 5,
        "assignee_id": null,
        "title": "Reordered"
    }))
    .expect("valid patch json");

    assert_eq!(
        patch.requested_fields(),
        vec![TaskField::Title, TaskField::Assignee, TaskField::StoryPoints]
    );
}

#[rstest]
fn empty_patch_reports_no_requested_fields() {
    let patch = TaskPatch::new();
    assert!(patch.is_empty());
    assert!(patch.requested_fields().is_empty());
}

#[rstest]
fn apply_update_sets_clears_and_stamps() {
    let mut snapshot = todo_snapshot(WorkspaceId::new(), ProjectId::new());
    snapshot.description = Some("stale".to_owned());
    let assignee = UserId::new();
    let stamped = Utc
        .with_ymd_and_hms(2024, 3, 2, 10, 30, 0)
        .single()
        .expect("valid timestamp");

    let update = TaskUpdate {
        description: Patch::Null,
        assignee_id: Patch::Value(assignee),
        story_points: Patch::Value(8),
        ..TaskUpdate::default()
    };
    snapshot.apply_update(&update, stamped);

    assert_eq!(snapshot.description, None);
    assert_eq!(snapshot.assignee_id, Some(assignee));
    assert_eq!(snapshot.story_points, Some(8));
    assert_eq!(snapshot.status, TaskStatus::Todo);
    assert_eq!(snapshot.updated_at, stamped);
}

#[rstest]
fn canonical_values_are_strings_or_none_never_empty_markers() {
    let mut snapshot = todo_snapshot(WorkspaceId::new(), ProjectId::new());
    let due = Utc
        .with_ymd_and_hms(2024, 4, 1, 0, 0, 0)
        .single()
        .expect("valid timestamp");
    snapshot.due_date = Some(due);

    assert_eq!(
        snapshot.canonical_value(TaskField::Status),
        Some("todo".to_owned())
    );
    assert_eq!(snapshot.canonical_value(TaskField::Description), None);
    assert_eq!(snapshot.canonical_value(TaskField::Assignee), None);
    assert_eq!(
        snapshot.canonical_value(TaskField::DueDate),
        Some(due.to_rfc3339())
    );
}

#[rstest]
fn serialized_patch_keeps_null_and_drops_absent_keys() {
    let patch = TaskPatch {
        description: Patch::Null,
        story_points: Patch::Value(3),
        ..TaskPatch::default()
    };
    let value = serde_json::to_value(&patch).expect("serializable patch");

    assert_eq!(value, json!({ "description": null, "story_points": 3 }));
}
