//! Authorization, validation, and application of task patches.

use crate::access::{
    domain::{Scope, UserId, WorkspaceId},
    ports::{MembershipError, MembershipProvider},
};
use crate::error::ErrorKind;
use crate::task_edit::{
    domain::{
        Patch, PatchValidationError, TaskField, TaskId, TaskPatch, TaskSnapshot, TaskStatus,
        TaskUpdate, UpdatedTask,
    },
    ports::{AuditStore, AuditStoreError, TaskStore, TaskStoreError},
    services::ChangeRecorder,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for patch application.
#[derive(Debug, Error)]
pub enum ApplyPatchError {
    /// The task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The actor may not edit tasks in the owning workspace.
    #[error("actor {actor_id} may not edit tasks in workspace {workspace_id}")]
    PermissionDenied {
        /// The acting user.
        actor_id: UserId,
        /// The workspace owning the task.
        workspace_id: WorkspaceId,
    },

    /// A present patch field failed validation.
    #[error(transparent)]
    Validation(#[from] PatchValidationError),

    /// The patch supplied no field keys at all.
    #[error("no changes provided")]
    NoChanges,

    /// The patch was persisted but changed no canonical value.
    #[error("no actual changes applied")]
    NoEffectiveChanges,

    /// Task store failure.
    #[error(transparent)]
    TaskStore(#[from] TaskStoreError),

    /// Audit store failure.
    #[error(transparent)]
    AuditStore(#[from] AuditStoreError),

    /// Membership provider failure.
    #[error(transparent)]
    Membership(#[from] MembershipError),
}

impl ApplyPatchError {
    /// Returns the taxonomy kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::TaskNotFound(_) | Self::TaskStore(TaskStoreError::NotFound(_)) => {
                ErrorKind::NotFound
            }
            Self::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            Self::Validation(_) | Self::NoChanges | Self::NoEffectiveChanges => {
                ErrorKind::InvalidArgument
            }
            Self::TaskStore(TaskStoreError::Persistence(_))
            | Self::AuditStore(_)
            | Self::Membership(_) => ErrorKind::Internal,
        }
    }
}

/// Result type for patch executor operations.
pub type ApplyPatchResult<T> = Result<T, ApplyPatchError>;

/// Validated task mutation service.
///
/// Stateless; each call is a small bounded sequence of collaborator round
/// trips with no internal locking. Two concurrent patches to the same task
/// race at the storage layer and the later write wins.
#[derive(Clone)]
pub struct PatchExecutor<T, M, A, C>
where
    T: TaskStore,
    M: MembershipProvider,
    A: AuditStore,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    membership: Arc<M>,
    recorder: ChangeRecorder<A, C>,
    clock: Arc<C>,
}

impl<T, M, A, C> PatchExecutor<T, M, A, C>
where
    T: TaskStore,
    M: MembershipProvider,
    A: AuditStore,
    C: Clock + Send + Sync,
{
    /// Creates a new patch executor recording through `audit`.
    #[must_use]
    pub fn new(tasks: Arc<T>, membership: Arc<M>, audit: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            membership,
            recorder: ChangeRecorder::new(audit, Arc::clone(&clock)),
            clock,
        }
    }

    /// Authorizes, validates, and applies a partial update to a task.
    ///
    /// Fields absent from the patch are untouched; fields present as null
    /// clear their column where allowed. Setting a non-null assignee on a
    /// todo task injects the `in_progress` transition unless the patch
    /// carries its own status key. The audit/history trail is written only
    /// after a successful persist.
    ///
    /// # Errors
    ///
    /// Returns [`ApplyPatchError::TaskNotFound`] for unknown tasks,
    /// [`ApplyPatchError::PermissionDenied`] when the actor lacks the edit
    /// capability in the owning workspace, [`ApplyPatchError::Validation`]
    /// for invalid present fields, [`ApplyPatchError::NoChanges`] for an
    /// empty patch, and [`ApplyPatchError::NoEffectiveChanges`] when the
    /// persisted patch changed no canonical value (the write has already
    /// happened in that case; see the crate design notes).
    pub async fn apply_patch(
        &self,
        task_id: TaskId,
        patch: TaskPatch,
        actor_id: UserId,
    ) -> ApplyPatchResult<UpdatedTask> {
        let before = self
            .tasks
            .get_by_id(task_id)
            .await?
            .ok_or(ApplyPatchError::TaskNotFound(task_id))?;

        self.authorize(actor_id, &before).await?;
        self.validate(&patch, &before).await?;

        let update = build_update(&patch, &before);
        if update.is_empty() {
            return Err(ApplyPatchError::NoChanges);
        }

        let after = self
            .tasks
            .update(task_id, &update, self.clock.utc())
            .await?;

        let changed = self
            .recorder
            .record(actor_id, &before, &after, &patch)
            .await?;
        if changed == 0 {
            // The row is already persisted and audited at this point; the
            // rejection is post hoc and the caller sees InvalidArgument.
            return Err(ApplyPatchError::NoEffectiveChanges);
        }

        debug!(task = %task_id, changed, "task patch applied");
        Ok(UpdatedTask::from(&after))
    }

    /// The actor must be a member of the owning workspace and hold the edit
    /// capability there.
    async fn authorize(&self, actor_id: UserId, task: &TaskSnapshot) -> ApplyPatchResult<()> {
        let membership = self
            .membership
            .membership_for(actor_id, Scope::Workspace(task.workspace_id))
            .await?;
        if membership.can_edit() {
            Ok(())
        } else {
            Err(ApplyPatchError::PermissionDenied {
                actor_id,
                workspace_id: task.workspace_id,
            })
        }
    }

    /// Validates only the fields explicitly present in the patch.
    async fn validate(&self, patch: &TaskPatch, task: &TaskSnapshot) -> ApplyPatchResult<()> {
        for (field, null) in [
            (TaskField::Title, patch.title.is_null()),
            (TaskField::Status, patch.status.is_null()),
            (TaskField::Priority, patch.priority.is_null()),
            (TaskField::Kind, patch.kind.is_null()),
        ] {
            if null {
                return Err(PatchValidationError::NullRequiredField(field).into());
            }
        }
        if let Patch::Value(title) = &patch.title
            && title.trim().is_empty()
        {
            return Err(PatchValidationError::BlankTitle.into());
        }
        if let Patch::Value(assignee_id) = patch.assignee_id {
            self.check_assignee(assignee_id, task).await?;
        }
        Ok(())
    }

    /// A non-null assignee must belong to the task's project or workspace.
    async fn check_assignee(
        &self,
        assignee_id: UserId,
        task: &TaskSnapshot,
    ) -> ApplyPatchResult<()> {
        let project = self
            .membership
            .membership_for(assignee_id, Scope::Project(task.project_id))
            .await?;
        if project.is_member() {
            return Ok(());
        }
        let workspace = self
            .membership
            .membership_for(assignee_id, Scope::Workspace(task.workspace_id))
            .await?;
        if workspace.is_member() {
            return Ok(());
        }
        Err(PatchValidationError::AssigneeNotMember(assignee_id).into())
    }
}

/// Builds the effective update set, injecting the derived status transition
/// when a non-null assignee lands on a todo task with no explicit status.
fn build_update(patch: &TaskPatch, before: &TaskSnapshot) -> TaskUpdate {
    let mut update = TaskUpdate::from(patch);
    if matches!(patch.assignee_id, Patch::Value(_))
        && before.status == TaskStatus::Todo
        && patch.status.is_absent()
    {
        update.status = Patch::Value(TaskStatus::InProgress);
    }
    update
}
