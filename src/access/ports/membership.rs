//! Membership/capability provider port.

use crate::access::domain::{Membership, Scope, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for membership provider operations.
pub type MembershipResult<T> = Result<T, MembershipError>;

/// Membership and capability lookup contract.
///
/// How capabilities are computed (roles, explicit grants, inheritance) is the
/// provider's concern; consumers only see the resolved [`Membership`] fact.
#[async_trait]
pub trait MembershipProvider: Send + Sync {
    /// Resolves the membership of `actor_id` within `scope`.
    ///
    /// A user who does not belong to the scope yields
    /// [`Membership::non_member`], not an error.
    ///
    /// # Errors
    ///
    /// Returns [`MembershipError::Provider`] when the underlying lookup
    /// fails.
    async fn membership_for(&self, actor_id: UserId, scope: Scope) -> MembershipResult<Membership>;
}

/// Errors returned by membership provider implementations.
#[derive(Debug, Clone, Error)]
pub enum MembershipError {
    /// Provider-layer failure.
    #[error("membership lookup failed: {0}")]
    Provider(Arc<dyn std::error::Error + Send + Sync>),
}

impl MembershipError {
    /// Wraps a provider error.
    pub fn provider(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Provider(Arc::new(err))
    }
}
