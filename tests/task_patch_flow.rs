//! Behavioural integration tests for the resolve-then-patch flow.
//!
//! These tests exercise the public service APIs end to end over the
//! in-memory adapters: a free-text lookup resolves a canonical ID, a patch
//! built from that ID is applied, and the audit/history trail is asserted.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "Test code uses indexing after length checks"
)]

use std::sync::Arc;

use async_trait::async_trait;
use mockable::DefaultClock;
use uuid::Uuid;

use sprintiq_core::access::{
    adapters::memory::InMemoryMembershipProvider,
    domain::{Capability, ProjectId, Scope, ScopeContext, UserId, WorkspaceId},
};
use sprintiq_core::resolver::{
    adapters::memory::InMemoryCandidateStore,
    domain::{EntityKind, ResolutionQuery},
    ports::{CandidateRow, CandidateStore, CandidateStoreResult, LabelPredicate},
    services::ResolutionService,
};
use sprintiq_core::task_edit::{
    adapters::memory::{InMemoryAuditStore, InMemoryTaskStore},
    domain::{
        Patch, TaskField, TaskId, TaskKind, TaskPatch, TaskPriority, TaskSnapshot, TaskStatus,
    },
    services::PatchExecutor,
};

use chrono::{TimeZone, Utc};

/// Candidate store standing in for a backend whose pre-filter is fuzzier
/// than plain substring matching (for example trigram-indexed search). It
/// returns every seeded row for any predicate, leaving ranking entirely to
/// the scorer.
struct FuzzyBackendStub {
    rows: Vec<CandidateRow>,
}

#[async_trait]
impl CandidateStore for FuzzyBackendStub {
    async fn find_candidates(
        &self,
        _kind: EntityKind,
        _scope: &ScopeContext,
        _predicate: &LabelPredicate,
        limit: usize,
    ) -> CandidateStoreResult<Vec<CandidateRow>> {
        Ok(self.rows.iter().take(limit).cloned().collect())
    }
}

fn seeded_snapshot(workspace_id: WorkspaceId, project_id: ProjectId) -> TaskSnapshot {
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

#[tokio::test(flavor = "multi_thread")]
async fn misspelled_project_query_resolves_the_intended_label() {
    let workspace = WorkspaceId::new();
    let actor = UserId::new();
    let target = Uuid::new_v4();
    let store = FuzzyBackendStub {
        rows: vec![
            CandidateRow::new(target, "SprintIQ Web".to_owned()),
            CandidateRow::new(Uuid::new_v4(), "SprintIQ Mobile".to_owned()),
            CandidateRow::new(Uuid::new_v4(), "Internal Tools".to_owned()),
        ],
    };
    let service = ResolutionService::new(
        Arc::new(store),
        Arc::new(InMemoryMembershipProvider::new()),
    );

    let scope = ScopeContext::new(actor).with_workspace(workspace);
    let query = ResolutionQuery::new(EntityKind::Project, "sprnt iq web", scope)
        .expect("valid query");
    let result = service.resolve(query).await.expect("resolution");

    let best = result.best.expect("best candidate");
    assert_eq!(best.id, target);
    assert_eq!(best.label, "SprintIQ Web");
    assert!(best.score > 0.5, "expected > 0.5, got {}", best.score);
    assert_eq!(result.candidates.len(), 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn resolved_assignee_patch_transitions_and_leaves_a_two_row_trail() {
    let workspace = WorkspaceId::new();
    let project = ProjectId::new();
    let actor = UserId::new();
    let assignee = UserId::new();

    let membership = InMemoryMembershipProvider::new();
    membership
        .grant(actor, Scope::Workspace(workspace), [Capability::Edit])
        .expect("grant actor");
    membership
        .grant(assignee, Scope::Project(project), [Capability::View])
        .expect("grant assignee");

    // Resolve "Sam Okafor" to a canonical user id first.
    let candidates = InMemoryCandidateStore::new();
    candidates
        .add_user(
            workspace,
            assignee.into_inner(),
            "Sam",
            "Okafor",
            "sam@acme.io",
        )
        .expect("seed user");
    candidates
        .add_user(workspace, Uuid::new_v4(), "Samir", "Patel", "samir@acme.io")
        .expect("seed user");
    let resolver =
        ResolutionService::new(Arc::new(candidates), Arc::new(membership.clone()));
    let scope = ScopeContext::new(actor).with_workspace(workspace);
    let query =
        ResolutionQuery::new(EntityKind::User, "Sam Okafor", scope).expect("valid query");
    let resolved = resolver.resolve(query).await.expect("resolution");
    let resolved_id = UserId::from_uuid(resolved.best.expect("best user").id);
    assert_eq!(resolved_id, assignee);

    // Apply the patch with the resolved id.
    let tasks = InMemoryTaskStore::new();
    let audit = InMemoryAuditStore::new();
    let task = seeded_snapshot(workspace, project);
    tasks.insert(task.clone()).expect("seed task");
    let executor = PatchExecutor::new(
        Arc::new(tasks),
        Arc::new(membership),
        Arc::new(audit.clone()),
        Arc::new(DefaultClock),
    );

    let patch = TaskPatch {
        assignee_id: Patch::Value(resolved_id),
        story_points: Patch::Value(5),
        ..TaskPatch::default()
    };
    let updated = executor
        .apply_patch(task.id, patch, actor)
        .await
        .expect("patch applies");

    assert_eq!(updated.status, TaskStatus::InProgress);
    assert_eq!(updated.assignee_id, Some(resolved_id));

    let audit_entries = audit.audit_entries().expect("audit read");
    let history = audit.history_entries().expect("history read");
    assert_eq!(audit_entries.len(), 1);
    assert_eq!(history.len(), 2);
    // The derived status transition leaves no history row of its own.
    assert_eq!(history[0].field, TaskField::Assignee);
    assert_eq!(history[1].field, TaskField::StoryPoints);

    // The persisted row carries the story points alongside the transition.
    let persisted = executor
        .apply_patch(
            task.id,
            TaskPatch {
                story_points: Patch::Value(5),
                ..TaskPatch::default()
            },
            actor,
        )
        .await;
    assert!(persisted.is_err(), "re-sending the same value is a no-op");
}
