//! Domain model for authorization scopes and memberships.

mod capability;
mod ids;
mod membership;

pub use capability::Capability;
pub use ids::{ProjectId, UserId, WorkspaceId};
pub use membership::{Membership, Scope, ScopeContext};
