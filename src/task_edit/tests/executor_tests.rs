//! Service tests for authorization, validation, and patch application.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::{fixture, rstest};

use super::helpers::todo_snapshot;
use crate::access::{
    adapters::memory::InMemoryMembershipProvider,
    domain::{Capability, ProjectId, Scope, UserId, WorkspaceId},
};
use crate::error::ErrorKind;
use crate::task_edit::{
    adapters::memory::{InMemoryAuditStore, InMemoryTaskStore},
    domain::{
        Patch, PatchValidationError, TaskField, TaskId, TaskPatch, TaskSnapshot, TaskStatus,
    },
    services::{ApplyPatchError, PatchExecutor},
};

type TestExecutor =
    PatchExecutor<InMemoryTaskStore, InMemoryMembershipProvider, InMemoryAuditStore, DefaultClock>;

struct World {
    executor: TestExecutor,
    tasks: InMemoryTaskStore,
    audit: InMemoryAuditStore,
    membership: InMemoryMembershipProvider,
    workspace: WorkspaceId,
    project: ProjectId,
    actor: UserId,
    assignee: UserId,
}

#[fixture]
fn world() -> World {
    let tasks = InMemoryTaskStore::new();
    let audit = InMemoryAuditStore::new();
    let membership = InMemoryMembershipProvider::new();
    let executor = PatchExecutor::new(
        Arc::new(tasks.clone()),
        Arc::new(membership.clone()),
        Arc::new(audit.clone()),
        Arc::new(DefaultClock),
    );

    let workspace = WorkspaceId::new();
    let project = ProjectId::new();
    let actor = UserId::new();
    let assignee = UserId::new();
    membership
        .grant(actor, Scope::Workspace(workspace), [Capability::Edit])
        .expect("grant actor");
    membership
        .grant(assignee, Scope::Project(project), [Capability::View])
        .expect("grant assignee");

    World {
        executor,
        tasks,
        audit,
        membership,
        workspace,
        project,
        actor,
        assignee,
    }
}

fn seed_task(world: &World) -> TaskSnapshot {
    let snapshot = todo_snapshot(world.workspace, world.project);
    world.tasks.insert(snapshot.clone()).expect("seed task");
    snapshot
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assigning_a_todo_task_injects_in_progress(world: World) {
    let task = seed_task(&world);
    let patch = TaskPatch {
        assignee_id: Patch::Value(world.assignee),
        ..TaskPatch::default()
    };

    let updated = world
        .executor
        .apply_patch(task.id, patch, world.actor)
        .await
        .expect("patch applies");

    assert_eq!(updated.status, TaskStatus::InProgress);
    assert_eq!(updated.assignee_id, Some(world.assignee));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assigning_a_task_past_todo_leaves_status_alone(world: World) {
    let mut task = todo_snapshot(world.workspace, world.project);
    task.status = TaskStatus::InProgress;
    world.tasks.insert(task.clone()).expect("seed task");
    let patch = TaskPatch {
        assignee_id: Patch::Value(world.assignee),
        ..TaskPatch::default()
    };

    let updated = world
        .executor
        .apply_patch(task.id, patch, world.actor)
        .await
        .expect("patch applies");

    assert_eq!(updated.status, TaskStatus::InProgress);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clearing_the_assignee_never_triggers_the_transition(world: World) {
    let mut task = todo_snapshot(world.workspace, world.project);
    task.assignee_id = Some(world.assignee);
    world.tasks.insert(task.clone()).expect("seed task");
    let patch = TaskPatch {
        assignee_id: Patch::Null,
        ..TaskPatch::default()
    };

    let updated = world
        .executor
        .apply_patch(task.id, patch, world.actor)
        .await
        .expect("patch applies");

    assert_eq!(updated.status, TaskStatus::Todo);
    assert_eq!(updated.assignee_id, None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn explicit_status_key_suppresses_the_derived_transition(world: World) {
    let task = seed_task(&world);
    let patch = TaskPatch {
        assignee_id: Patch::Value(world.assignee),
        status: Patch::Value(TaskStatus::InReview),
        ..TaskPatch::default()
    };

    let updated = world
        .executor
        .apply_patch(task.id, patch, world.actor)
        .await
        .expect("patch applies");

    assert_eq!(updated.status, TaskStatus::InReview);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_patch_is_rejected_with_no_writes(world: World) {
    let task = seed_task(&world);

    let err = world
        .executor
        .apply_patch(task.id, TaskPatch::new(), world.actor)
        .await
        .expect_err("empty patch");

    assert!(matches!(err, ApplyPatchError::NoChanges));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(world.audit.audit_entries().expect("audit read").is_empty());
    assert!(world.audit.history_entries().expect("history read").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn equal_value_patch_is_rejected_post_persist_with_audit_but_no_history(world: World) {
    let task = seed_task(&world);
    let patch = TaskPatch {
        title: Patch::Value(task.title.clone()),
        ..TaskPatch::default()
    };

    let err = world
        .executor
        .apply_patch(task.id, patch, world.actor)
        .await
        .expect_err("no actual change");

    // The presence-based no-op check passes, the row persists and is
    // audited, then the recorder's diff comes back empty.
    assert!(matches!(err, ApplyPatchError::NoEffectiveChanges));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(world.audit.audit_entries().expect("audit read").len(), 1);
    assert!(world.audit.history_entries().expect("history read").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_task_is_not_found(world: World) {
    let patch = TaskPatch {
        story_points: Patch::Value(5),
        ..TaskPatch::default()
    };

    let err = world
        .executor
        .apply_patch(TaskId::new(), patch, world.actor)
        .await
        .expect_err("unknown task");

    assert!(matches!(err, ApplyPatchError::TaskNotFound(_)));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn actor_without_edit_capability_is_denied(world: World) {
    let task = seed_task(&world);
    let reader = UserId::new();
    world
        .membership
        .grant(reader, Scope::Workspace(world.workspace), [Capability::View])
        .expect("grant reader");
    let patch = TaskPatch {
        story_points: Patch::Value(5),
        ..TaskPatch::default()
    };

    let err = world
        .executor
        .apply_patch(task.id, patch, reader)
        .await
        .expect_err("insufficient capability");

    assert!(matches!(err, ApplyPatchError::PermissionDenied { .. }));
    assert_eq!(err.kind(), ErrorKind::PermissionDenied);
    assert!(world.audit.audit_entries().expect("audit read").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assignee_outside_project_and_workspace_is_invalid(world: World) {
    let task = seed_task(&world);
    let outsider = UserId::new();
    let patch = TaskPatch {
        assignee_id: Patch::Value(outsider),
        ..TaskPatch::default()
    };

    let err = world
        .executor
        .apply_patch(task.id, patch, world.actor)
        .await
        .expect_err("outsider assignee");

    assert!(matches!(
        err,
        ApplyPatchError::Validation(PatchValidationError::AssigneeNotMember(id)) if id == outsider
    ));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn workspace_member_assignee_is_accepted(world: World) {
    let task = seed_task(&world);
    let colleague = UserId::new();
    world
        .membership
        .grant(colleague, Scope::Workspace(world.workspace), [Capability::View])
        .expect("grant colleague");
    let patch = TaskPatch {
        assignee_id: Patch::Value(colleague),
        ..TaskPatch::default()
    };

    let updated = world
        .executor
        .apply_patch(task.id, patch, world.actor)
        .await
        .expect("patch applies");

    assert_eq!(updated.assignee_id, Some(colleague));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn null_in_a_required_field_is_rejected(world: World) {
    let task = seed_task(&world);
    let patch = TaskPatch {
        status: Patch::Null,
        ..TaskPatch::default()
    };

    let err = world
        .executor
        .apply_patch(task.id, patch, world.actor)
        .await
        .expect_err("null status");

    assert!(matches!(
        err,
        ApplyPatchError::Validation(PatchValidationError::NullRequiredField(TaskField::Status))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_title_is_rejected(world: World) {
    let task = seed_task(&world);
    let patch = TaskPatch {
        title: Patch::Value("   ".to_owned()),
        ..TaskPatch::default()
    };

    let err = world
        .executor
        .apply_patch(task.id, patch, world.actor)
        .await
        .expect_err("blank title");

    assert!(matches!(
        err,
        ApplyPatchError::Validation(PatchValidationError::BlankTitle)
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn two_field_patch_writes_one_audit_entry_and_two_history_rows(world: World) {
    let task = seed_task(&world);
    // Key order here is story points first; emission order must not follow it.
    let patch: TaskPatch = serde_json::from_value(serde_json::json!({
        "story_points": 5,
        "title": "Fix login redirect loop properly"
    }))
    .expect("valid patch json");

    world
        .executor
        .apply_patch(task.id, patch, world.actor)
        .await
        .expect("patch applies");

    let audit = world.audit.audit_entries().expect("audit read");
    let history = world.audit.history_entries().expect("history read");
    assert_eq!(audit.len(), 1);
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].field, TaskField::Title);
    assert_eq!(history[1].field, TaskField::StoryPoints);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn derived_status_transition_leaves_no_history_row(world: World) {
    let task = seed_task(&world);
    let patch = TaskPatch {
        assignee_id: Patch::Value(world.assignee),
        story_points: Patch::Value(5),
        ..TaskPatch::default()
    };

    let updated = world
        .executor
        .apply_patch(task.id, patch, world.actor)
        .await
        .expect("patch applies");

    assert_eq!(updated.status, TaskStatus::InProgress);
    let history = world.audit.history_entries().expect("history read");
    let fields: Vec<TaskField> = history.iter().map(|entry| entry.field).collect();
    assert_eq!(fields, vec![TaskField::Assignee, TaskField::StoryPoints]);
}

mod failing_collaborators {
    //! Collaborator failures must propagate unchanged, never be swallowed.

    use super::*;
    use crate::task_edit::{
        domain::{TaskSnapshot, TaskUpdate},
        ports::{TaskStore, TaskStoreError, TaskStoreResult},
    };
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use mockall::mock;

    mock! {
        pub Tasks {}

        #[async_trait]
        impl TaskStore for Tasks {
            async fn get_by_id(&self, id: TaskId) -> TaskStoreResult<Option<TaskSnapshot>>;
            async fn update(
                &self,
                id: TaskId,
                update: &TaskUpdate,
                updated_at: DateTime<Utc>,
            ) -> TaskStoreResult<TaskSnapshot>;
        }
    }

    #[rstest]
    #[tokio::test(flavor = "multi_thread")]
    async fn task_store_failure_surfaces_as_internal(world: World) {
        let mut tasks = MockTasks::new();
        tasks.expect_get_by_id().returning(|_| {
            Err(TaskStoreError::persistence(std::io::Error::other(
                "connection reset",
            )))
        });
        let executor = PatchExecutor::new(
            Arc::new(tasks),
            Arc::new(world.membership.clone()),
            Arc::new(world.audit.clone()),
            Arc::new(DefaultClock),
        );
        let patch = TaskPatch {
            story_points: Patch::Value(5),
            ..TaskPatch::default()
        };

        let err = executor
            .apply_patch(TaskId::new(), patch, world.actor)
            .await
            .expect_err("store failure");

        assert!(matches!(
            err,
            ApplyPatchError::TaskStore(TaskStoreError::Persistence(_))
        ));
        assert_eq!(err.kind(), ErrorKind::Internal);
    }
}
