//! Port contracts for membership and capability resolution.

pub mod membership;

pub use membership::{MembershipError, MembershipProvider, MembershipResult};
