//! In-memory audit/history store for recorder tests.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::task_edit::{
    domain::{AuditLogEntry, HistoryEntry},
    ports::{AuditStore, AuditStoreError, AuditStoreResult},
};

#[derive(Debug, Default)]
struct InMemoryAuditState {
    audit_entries: Vec<AuditLogEntry>,
    history_entries: Vec<HistoryEntry>,
}

/// Thread-safe in-memory append-only audit store.
///
/// Entries can be read back for assertions but never removed.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuditStore {
    state: Arc<RwLock<InMemoryAuditState>>,
}

impl InMemoryAuditStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded audit entries in append order.
    ///
    /// # Errors
    ///
    /// Returns [`AuditStoreError::Persistence`] when internal state is
    /// poisoned.
    pub fn audit_entries(&self) -> AuditStoreResult<Vec<AuditLogEntry>> {
        let state = self
            .state
            .read()
            .map_err(|err| AuditStoreError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(state.audit_entries.clone())
    }

    /// Returns all recorded history rows in append order.
    ///
    /// # Errors
    ///
    /// Returns [`AuditStoreError::Persistence`] when internal state is
    /// poisoned.
    pub fn history_entries(&self) -> AuditStoreResult<Vec<HistoryEntry>> {
        let state = self
            .state
            .read()
            .map_err(|err| AuditStoreError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(state.history_entries.clone())
    }
}

#[async_trait]
impl AuditStore for InMemoryAuditStore {
    async fn append(
        &self,
        entry: AuditLogEntry,
        history: Vec<HistoryEntry>,
    ) -> AuditStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| AuditStoreError::persistence(std::io::Error::other(err.to_string())))?;
        state.audit_entries.push(entry);
        state.history_entries.extend(history);
        Ok(())
    }
}
