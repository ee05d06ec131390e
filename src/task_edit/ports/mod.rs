//! Port contracts for task persistence and change recording.

pub mod audit_store;
pub mod task_store;

pub use audit_store::{AuditStore, AuditStoreError, AuditStoreResult};
pub use task_store::{TaskStore, TaskStoreError, TaskStoreResult};
