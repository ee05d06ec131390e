//! Validated task mutation with audit and history recording.
//!
//! Callers submit a partial patch against a task; the executor authorizes
//! the actor, validates only the fields the patch actually carries, injects
//! the single derived transition (assigning a todo task moves it to
//! in-progress), persists the effective update, and hands before/after
//! snapshots to the recorder. The recorder appends exactly one audit entry
//! per persisted patch and one history row per field whose canonical value
//! changed. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
