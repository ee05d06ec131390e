//! Task store port.

use crate::task_edit::domain::{TaskId, TaskSnapshot, TaskUpdate};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task persistence contract.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Loads the full snapshot of a task, including its owning
    /// project/workspace linkage.
    ///
    /// Returns `None` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the lookup fails.
    async fn get_by_id(&self, id: TaskId) -> TaskStoreResult<Option<TaskSnapshot>>;

    /// Applies an effective update set to a task, stamping `updated_at`,
    /// and returns the resulting snapshot.
    ///
    /// Last write wins: concurrent updates to the same task race at this
    /// boundary with no coordination.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist.
    async fn update(
        &self,
        id: TaskId,
        update: &TaskUpdate,
        updated_at: DateTime<Utc>,
    ) -> TaskStoreResult<TaskSnapshot>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
