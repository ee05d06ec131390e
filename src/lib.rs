//! `SprintIQ` core: auditable task editing for loosely-specified callers.
//!
//! This crate lets clients without stable identifiers (conversational AI
//! agents in particular) make precise, auditable edits to task records. It
//! provides fuzzy entity resolution from free text to canonical IDs within an
//! authorization scope, a validated mutation executor for partial task
//! updates, and an append-only audit/history trail for every applied change.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external collaborators
//! - **Adapters**: Concrete implementations of ports (in-memory today)
//!
//! # Modules
//!
//! - [`access`]: Scope, membership, and capability contracts
//! - [`resolver`]: Free-text to canonical-ID entity resolution
//! - [`task_edit`]: Validated task patches with audit and history recording

pub mod access;
pub mod error;
pub mod resolver;
pub mod task_edit;
