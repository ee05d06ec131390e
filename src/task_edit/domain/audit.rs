//! Append-only audit and history records.

use super::{TaskField, TaskId};
use crate::access::domain::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Action recorded in an audit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// A task patch was persisted.
    TaskUpdated,
}

impl AuditAction {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TaskUpdated => "task_updated",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One append-only audit entry per persisted patch.
///
/// The details blob carries the caller's originally requested patch, not
/// the computed effective update, for traceability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    /// The mutated task.
    pub task_id: TaskId,
    /// The acting user.
    pub actor_id: UserId,
    /// What happened.
    pub action: AuditAction,
    /// The originally requested patch as JSON.
    pub details: serde_json::Value,
    /// When the entry was recorded.
    pub timestamp: DateTime<Utc>,
}

/// One append-only history row per field whose canonical value changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The mutated task.
    pub task_id: TaskId,
    /// The acting user.
    pub actor_id: UserId,
    /// The changed field.
    pub field: TaskField,
    /// Canonical value before the change, `None` when previously unset.
    pub old_value: Option<String>,
    /// Canonical value after the change, `None` when cleared.
    pub new_value: Option<String>,
    /// When the row was recorded.
    pub timestamp: DateTime<Utc>,
}
