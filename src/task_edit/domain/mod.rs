//! Domain model for task patches, snapshots, and change records.

mod audit;
mod error;
mod field;
mod ids;
mod patch;
mod snapshot;
mod status;

pub use audit::{AuditAction, AuditLogEntry, HistoryEntry};
pub use error::{ParseTaskEnumError, PatchValidationError};
pub use field::TaskField;
pub use ids::{SprintId, TaskId};
pub use patch::{Patch, TaskPatch, TaskUpdate};
pub use snapshot::{TaskSnapshot, UpdatedTask};
pub use status::{TaskKind, TaskPriority, TaskStatus};
