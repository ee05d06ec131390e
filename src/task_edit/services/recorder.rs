//! Audit/history recording for applied patches.

use crate::access::domain::UserId;
use crate::task_edit::{
    domain::{AuditAction, AuditLogEntry, HistoryEntry, TaskField, TaskPatch, TaskSnapshot},
    ports::{AuditStore, AuditStoreError, AuditStoreResult},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::debug;

/// Writes the immutable change trail for one applied patch.
///
/// Invoked by the executor strictly after a successful persist; a rejected
/// patch never produces an audit entry.
#[derive(Clone)]
pub struct ChangeRecorder<A, C>
where
    A: AuditStore,
    C: Clock + Send + Sync,
{
    store: Arc<A>,
    clock: Arc<C>,
}

impl<A, C> ChangeRecorder<A, C>
where
    A: AuditStore,
    C: Clock + Send + Sync,
{
    /// Creates a new change recorder.
    #[must_use]
    pub const fn new(store: Arc<A>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Records one applied patch: exactly one audit entry carrying the
    /// originally requested patch, plus one history row per explicitly
    /// requested field whose canonical value changed, in the fixed
    /// [`TaskField::ALL`] order.
    ///
    /// Derived fields (the injected status transition) are not diffed
    /// unless their own key was explicitly requested.
    ///
    /// Returns the number of history rows written so the caller can detect
    /// a patch that changed nothing.
    ///
    /// # Errors
    ///
    /// Returns [`AuditStoreError::Persistence`] when serializing the patch
    /// or appending the batch fails.
    pub async fn record(
        &self,
        actor_id: UserId,
        before: &TaskSnapshot,
        after: &TaskSnapshot,
        requested: &TaskPatch,
    ) -> AuditStoreResult<usize> {
        let timestamp = self.clock.utc();
        let details =
            serde_json::to_value(requested).map_err(AuditStoreError::persistence)?;
        let entry = AuditLogEntry {
            task_id: after.id,
            actor_id,
            action: AuditAction::TaskUpdated,
            details,
            timestamp,
        };

        let history: Vec<HistoryEntry> = TaskField::ALL
            .into_iter()
            .filter(|field| requested.has_field(*field))
            .filter_map(|field| {
                let old_value = before.canonical_value(field);
                let new_value = after.canonical_value(field);
                (old_value != new_value).then_some(HistoryEntry {
                    task_id: after.id,
                    actor_id,
                    field,
                    old_value,
                    new_value,
                    timestamp,
                })
            })
            .collect();

        let changed = history.len();
        self.store.append(entry, history).await?;
        debug!(task = %after.id, changed, "recorded task change trail");
        Ok(changed)
    }
}
