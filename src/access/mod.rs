//! Scope, membership, and capability contracts.
//!
//! Both entity resolution and task mutation are bounded by an authorization
//! scope: a workspace or project the acting user belongs to. This module owns
//! the shared identifier newtypes, the [`domain::Scope`] and
//! [`domain::Capability`] value types, and the membership/capability provider
//! port consumed by the resolver and the patch executor. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
