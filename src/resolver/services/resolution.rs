//! Scoped candidate search, scoring, and ranking.

use crate::access::{
    domain::{Scope, ScopeContext},
    ports::{MembershipError, MembershipProvider},
};
use crate::error::ErrorKind;
use crate::resolver::{
    domain::{
        Candidate, EntityKind, ResolutionQuery, ResolutionResult, ResolverDomainError, similarity,
    },
    ports::{CandidateRow, CandidateStore, CandidateStoreError, LabelPredicate},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for entity resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Query validation failed.
    #[error(transparent)]
    Domain(#[from] ResolverDomainError),

    /// The actor has no workspace membership to search users within.
    #[error("no workspace membership available for user lookup")]
    NoSearchScope,

    /// Candidate store failure.
    #[error(transparent)]
    CandidateStore(#[from] CandidateStoreError),

    /// Membership provider failure.
    #[error(transparent)]
    Membership(#[from] MembershipError),
}

impl ResolveError {
    /// Returns the taxonomy kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(_) => ErrorKind::InvalidArgument,
            Self::NoSearchScope => ErrorKind::NotFound,
            Self::CandidateStore(_) | Self::Membership(_) => ErrorKind::Internal,
        }
    }
}

/// Result type for resolution service operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Entity resolution orchestration service.
///
/// Stateless; each call performs a bounded number of sequential store round
/// trips and is safe to run concurrently with unrelated lookups.
#[derive(Clone)]
pub struct ResolutionService<S, M>
where
    S: CandidateStore,
    M: MembershipProvider,
{
    candidates: Arc<S>,
    membership: Arc<M>,
}

impl<S, M> ResolutionService<S, M>
where
    S: CandidateStore,
    M: MembershipProvider,
{
    /// Creates a new resolution service.
    #[must_use]
    pub const fn new(candidates: Arc<S>, membership: Arc<M>) -> Self {
        Self {
            candidates,
            membership,
        }
    }

    /// Resolves a free-text query to ranked candidates within its scope.
    ///
    /// The substring pre-filter runs first; only when it matches nothing is
    /// the fallback predicate tried (tokenized-AND for projects and tasks,
    /// given/family name parts for users). Candidates from whichever step
    /// produced rows are scored against the raw text, empty labels dropped,
    /// and the remainder sorted descending by score.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Domain`] when the scope context lacks the
    /// boundary the entity kind requires, [`ResolveError::NoSearchScope`]
    /// when a user lookup is attempted by an actor with no workspace
    /// membership, and storage/provider errors unchanged.
    pub async fn resolve(&self, query: ResolutionQuery) -> ResolveResult<ResolutionResult> {
        require_scope(&query)?;
        self.check_user_search_scope(&query).await?;

        let raw = query.raw_text().trim();
        let rows = self
            .candidates
            .find_candidates(
                query.kind(),
                query.scope(),
                &LabelPredicate::Contains(raw.to_owned()),
                query.limit(),
            )
            .await?;

        let rows = if rows.is_empty() {
            self.fallback_rows(&query, raw).await?
        } else {
            rows
        };

        let mut candidates: Vec<Candidate> = rows
            .iter()
            .filter(|row| !row.label.trim().is_empty())
            .map(|row| Candidate::new(row.id, row.label.clone(), score_row(&query, raw, row)))
            .collect();
        candidates.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.label.cmp(&b.label))
        });

        debug!(
            kind = %query.kind(),
            matched = candidates.len(),
            "resolved entity query"
        );

        let best = candidates.first().cloned();
        Ok(ResolutionResult {
            query,
            best,
            candidates,
        })
    }

    /// User lookups are bounded by the actor's workspace membership; an
    /// actor outside the workspace has no scope to search at all.
    async fn check_user_search_scope(&self, query: &ResolutionQuery) -> ResolveResult<()> {
        if query.kind() != EntityKind::User {
            return Ok(());
        }
        let Some(workspace_id) = query.scope().workspace_id() else {
            return Ok(());
        };
        let membership = self
            .membership
            .membership_for(query.scope().actor_id(), Scope::Workspace(workspace_id))
            .await?;
        if membership.is_member() {
            Ok(())
        } else {
            Err(ResolveError::NoSearchScope)
        }
    }

    /// Second-chance query used only when the substring pre-filter matched
    /// nothing.
    async fn fallback_rows(
        &self,
        query: &ResolutionQuery,
        raw: &str,
    ) -> ResolveResult<Vec<CandidateRow>> {
        let Some(predicate) = fallback_predicate(query.kind(), raw) else {
            return Ok(Vec::new());
        };
        debug!(kind = %query.kind(), "substring pre-filter empty, trying fallback predicate");
        Ok(self
            .candidates
            .find_candidates(query.kind(), query.scope(), &predicate, query.limit())
            .await?)
    }
}

/// Validates that the scope context carries the boundary the kind requires.
fn require_scope(query: &ResolutionQuery) -> Result<(), ResolverDomainError> {
    let scope: &ScopeContext = query.scope();
    let missing = match query.kind() {
        EntityKind::Project | EntityKind::User => scope.workspace_id().is_none(),
        EntityKind::Task => scope.project_id().is_none(),
    };
    if missing {
        let required = match query.kind() {
            EntityKind::Project | EntityKind::User => "workspace",
            EntityKind::Task => "project",
        };
        return Err(ResolverDomainError::MissingScope {
            kind: query.kind(),
            required,
        });
    }
    Ok(())
}

/// Builds the fallback predicate for a kind, or `None` when no useful
/// fallback exists for the raw text.
fn fallback_predicate(kind: EntityKind, raw: &str) -> Option<LabelPredicate> {
    let tokens: Vec<String> = raw.split_whitespace().map(str::to_owned).collect();
    match kind {
        EntityKind::Project | EntityKind::Task => {
            if tokens.len() < 2 {
                None
            } else {
                Some(LabelPredicate::AllTokens(tokens))
            }
        }
        EntityKind::User => {
            let (given, family) = tokens.split_first()?;
            if family.is_empty() {
                return None;
            }
            Some(LabelPredicate::NameParts {
                given: given.clone(),
                family: family.join(" "),
            })
        }
    }
}

/// Scores one row against the raw text, adding user-kind bonuses.
#[expect(
    clippy::float_arithmetic,
    reason = "user-kind bonuses stack additively on the Dice base score"
)]
fn score_row(query: &ResolutionQuery, raw: &str, row: &CandidateRow) -> f64 {
    let mut score = similarity(raw, &row.label);
    if query.kind() == EntityKind::User {
        let needle = raw.to_lowercase();
        let label = row.label.to_lowercase();
        if label.contains(&needle) {
            score += 0.8;
        }
        if let Some(contact) = &row.contact
            && contact.to_lowercase().contains(&needle)
        {
            score += 0.6;
        }
        if label == needle {
            score += 0.2;
        }
    }
    score
}
