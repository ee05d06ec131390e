//! In-memory adapters for access ports.

mod membership;

pub use membership::InMemoryMembershipProvider;
