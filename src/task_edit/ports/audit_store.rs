//! Audit/history store port.

use crate::task_edit::domain::{AuditLogEntry, HistoryEntry};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for audit store operations.
pub type AuditStoreResult<T> = Result<T, AuditStoreError>;

/// Append-only change-trail persistence contract.
///
/// Entries are never mutated or deleted through this port.
#[async_trait]
pub trait AuditStore: Send + Sync {
    /// Appends one audit entry and its history rows as a batch.
    ///
    /// # Errors
    ///
    /// Returns [`AuditStoreError::Persistence`] when the append fails.
    async fn append(&self, entry: AuditLogEntry, history: Vec<HistoryEntry>)
    -> AuditStoreResult<()>;
}

/// Errors returned by audit store implementations.
#[derive(Debug, Clone, Error)]
pub enum AuditStoreError {
    /// Persistence-layer failure.
    #[error("audit append failed: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AuditStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
