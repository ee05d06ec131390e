//! In-memory adapters for task editing ports.

mod audit_store;
mod task_store;

pub use audit_store::InMemoryAuditStore;
pub use task_store::InMemoryTaskStore;
