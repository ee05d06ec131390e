//! In-memory candidate store for resolution tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::access::domain::{ProjectId, ScopeContext, WorkspaceId};
use crate::resolver::{
    domain::EntityKind,
    ports::{
        CandidateRow, CandidateStore, CandidateStoreError, CandidateStoreResult, LabelPredicate,
    },
};

#[derive(Debug, Clone)]
struct LabelledRecord {
    id: Uuid,
    label: String,
}

#[derive(Debug, Clone)]
struct UserRecord {
    id: Uuid,
    given_name: String,
    family_name: String,
    email: String,
}

impl UserRecord {
    fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }

    fn to_row(&self) -> CandidateRow {
        CandidateRow::new(self.id, self.full_name()).with_contact(self.email.clone())
    }
}

#[derive(Debug, Default)]
struct InMemoryCandidateState {
    projects: HashMap<WorkspaceId, Vec<LabelledRecord>>,
    tasks: HashMap<ProjectId, Vec<LabelledRecord>>,
    users: HashMap<WorkspaceId, Vec<UserRecord>>,
}

/// Thread-safe in-memory candidate store.
///
/// Projects and users are keyed by workspace, tasks by project, mirroring
/// the scope boundaries the resolution service narrows by.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCandidateStore {
    state: Arc<RwLock<InMemoryCandidateState>>,
}

impl InMemoryCandidateStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a project candidate to a workspace.
    ///
    /// # Errors
    ///
    /// Returns [`CandidateStoreError::Backend`] when internal state is
    /// poisoned.
    pub fn add_project(
        &self,
        workspace_id: WorkspaceId,
        id: Uuid,
        label: impl Into<String>,
    ) -> CandidateStoreResult<()> {
        let mut state = write_state(&self.state)?;
        state.projects.entry(workspace_id).or_default().push(LabelledRecord {
            id,
            label: label.into(),
        });
        Ok(())
    }

    /// Adds a task candidate to a project.
    ///
    /// # Errors
    ///
    /// Returns [`CandidateStoreError::Backend`] when internal state is
    /// poisoned.
    pub fn add_task(
        &self,
        project_id: ProjectId,
        id: Uuid,
        label: impl Into<String>,
    ) -> CandidateStoreResult<()> {
        let mut state = write_state(&self.state)?;
        state.tasks.entry(project_id).or_default().push(LabelledRecord {
            id,
            label: label.into(),
        });
        Ok(())
    }

    /// Adds a user candidate to a workspace.
    ///
    /// # Errors
    ///
    /// Returns [`CandidateStoreError::Backend`] when internal state is
    /// poisoned.
    pub fn add_user(
        &self,
        workspace_id: WorkspaceId,
        id: Uuid,
        given_name: impl Into<String>,
        family_name: impl Into<String>,
        email: impl Into<String>,
    ) -> CandidateStoreResult<()> {
        let mut state = write_state(&self.state)?;
        state.users.entry(workspace_id).or_default().push(UserRecord {
            id,
            given_name: given_name.into(),
            family_name: family_name.into(),
            email: email.into(),
        });
        Ok(())
    }
}

type SharedState = Arc<RwLock<InMemoryCandidateState>>;

fn write_state(
    state: &SharedState,
) -> CandidateStoreResult<std::sync::RwLockWriteGuard<'_, InMemoryCandidateState>> {
    state
        .write()
        .map_err(|err| CandidateStoreError::backend(std::io::Error::other(err.to_string())))
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn label_matches(label: &str, predicate: &LabelPredicate) -> bool {
    match predicate {
        LabelPredicate::Contains(needle) => contains_ci(label, needle),
        LabelPredicate::AllTokens(tokens) => tokens.iter().all(|token| contains_ci(label, token)),
        // Split name fields only exist on user rows.
        LabelPredicate::NameParts { .. } => false,
    }
}

fn user_matches(user: &UserRecord, predicate: &LabelPredicate) -> bool {
    match predicate {
        LabelPredicate::Contains(needle) => contains_ci(&user.full_name(), needle),
        LabelPredicate::AllTokens(tokens) => {
            let full_name = user.full_name();
            tokens.iter().all(|token| contains_ci(&full_name, token))
        }
        LabelPredicate::NameParts { given, family } => {
            contains_ci(&user.given_name, given) && contains_ci(&user.family_name, family)
        }
    }
}

#[async_trait]
impl CandidateStore for InMemoryCandidateStore {
    async fn find_candidates(
        &self,
        kind: EntityKind,
        scope: &ScopeContext,
        predicate: &LabelPredicate,
        limit: usize,
    ) -> CandidateStoreResult<Vec<CandidateRow>> {
        let state = self
            .state
            .read()
            .map_err(|err| CandidateStoreError::backend(std::io::Error::other(err.to_string())))?;

        let rows = match kind {
            EntityKind::Project => scope
                .workspace_id()
                .and_then(|workspace_id| state.projects.get(&workspace_id))
                .map(|records| {
                    records
                        .iter()
                        .filter(|record| label_matches(&record.label, predicate))
                        .take(limit)
                        .map(|record| CandidateRow::new(record.id, record.label.clone()))
                        .collect()
                })
                .unwrap_or_default(),
            EntityKind::Task => scope
                .project_id()
                .and_then(|project_id| state.tasks.get(&project_id))
                .map(|records| {
                    records
                        .iter()
                        .filter(|record| label_matches(&record.label, predicate))
                        .take(limit)
                        .map(|record| CandidateRow::new(record.id, record.label.clone()))
                        .collect()
                })
                .unwrap_or_default(),
            EntityKind::User => scope
                .workspace_id()
                .and_then(|workspace_id| state.users.get(&workspace_id))
                .map(|users| {
                    users
                        .iter()
                        .filter(|user| user_matches(user, predicate))
                        .take(limit)
                        .map(UserRecord::to_row)
                        .collect()
                })
                .unwrap_or_default(),
        };

        Ok(rows)
    }
}
