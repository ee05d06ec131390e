//! In-memory task store for executor tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task_edit::{
    domain::{TaskId, TaskSnapshot, TaskUpdate},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<HashMap<TaskId, TaskSnapshot>>>,
}

impl InMemoryTaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a task snapshot, replacing any existing row.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when internal state is
    /// poisoned.
    pub fn insert(&self, snapshot: TaskSnapshot) -> TaskStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))?;
        state.insert(snapshot.id, snapshot);
        Ok(())
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn get_by_id(&self, id: TaskId) -> TaskStoreResult<Option<TaskSnapshot>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(state.get(&id).cloned())
    }

    async fn update(
        &self,
        id: TaskId,
        update: &TaskUpdate,
        updated_at: DateTime<Utc>,
    ) -> TaskStoreResult<TaskSnapshot> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))?;
        let snapshot = state.get_mut(&id).ok_or(TaskStoreError::NotFound(id))?;
        snapshot.apply_update(update, updated_at);
        Ok(snapshot.clone())
    }
}
