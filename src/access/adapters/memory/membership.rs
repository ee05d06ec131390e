//! In-memory membership provider for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::access::{
    domain::{Capability, Membership, Scope, UserId},
    ports::{MembershipError, MembershipProvider, MembershipResult},
};

/// Thread-safe in-memory membership provider.
///
/// Unknown (actor, scope) pairs resolve to [`Membership::non_member`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryMembershipProvider {
    state: Arc<RwLock<HashMap<(UserId, Scope), Membership>>>,
}

impl InMemoryMembershipProvider {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Grants `actor_id` membership of `scope` with the given capabilities.
    ///
    /// # Errors
    ///
    /// Returns [`MembershipError::Provider`] when internal state is poisoned.
    pub fn grant(
        &self,
        actor_id: UserId,
        scope: Scope,
        capabilities: impl IntoIterator<Item = Capability>,
    ) -> MembershipResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| MembershipError::provider(std::io::Error::other(err.to_string())))?;
        state.insert((actor_id, scope), Membership::member(capabilities));
        Ok(())
    }
}

#[async_trait]
impl MembershipProvider for InMemoryMembershipProvider {
    async fn membership_for(&self, actor_id: UserId, scope: Scope) -> MembershipResult<Membership> {
        let state = self
            .state
            .read()
            .map_err(|err| MembershipError::provider(std::io::Error::other(err.to_string())))?;
        Ok(state
            .get(&(actor_id, scope))
            .cloned()
            .unwrap_or_else(Membership::non_member))
    }
}
