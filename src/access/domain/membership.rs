//! Membership facts resolved for an actor within a scope.

use super::{Capability, ProjectId, UserId, WorkspaceId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Authorization boundary a lookup or mutation is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum Scope {
    /// A workspace boundary.
    Workspace(WorkspaceId),
    /// A project boundary within a workspace.
    Project(ProjectId),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Workspace(id) => write!(f, "workspace:{id}"),
            Self::Project(id) => write!(f, "project:{id}"),
        }
    }
}

/// Resolved membership of an actor within a single scope.
///
/// Produced by the membership provider port; this crate only consumes the
/// boolean membership fact and the capability set, never how either was
/// computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    is_member: bool,
    capabilities: HashSet<Capability>,
}

impl Membership {
    /// Creates a membership grant carrying the given capabilities.
    #[must_use]
    pub fn member(capabilities: impl IntoIterator<Item = Capability>) -> Self {
        Self {
            is_member: true,
            capabilities: capabilities.into_iter().collect(),
        }
    }

    /// Creates the non-member fact: no membership, no capabilities.
    #[must_use]
    pub fn non_member() -> Self {
        Self {
            is_member: false,
            capabilities: HashSet::new(),
        }
    }

    /// Returns whether the actor belongs to the scope.
    #[must_use]
    pub const fn is_member(&self) -> bool {
        self.is_member
    }

    /// Returns whether the actor holds the given capability in the scope.
    #[must_use]
    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// Returns whether the actor may edit tasks in the scope.
    #[must_use]
    pub fn can_edit(&self) -> bool {
        self.is_member && self.has_capability(Capability::Edit)
    }
}

/// Scope context supplied with every resolution query.
///
/// The actor is always known; workspace and project are optional because
/// different entity kinds require different boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeContext {
    actor_id: UserId,
    workspace_id: Option<WorkspaceId>,
    project_id: Option<ProjectId>,
}

impl ScopeContext {
    /// Creates a scope context for the given actor with no boundaries set.
    #[must_use]
    pub const fn new(actor_id: UserId) -> Self {
        Self {
            actor_id,
            workspace_id: None,
            project_id: None,
        }
    }

    /// Sets the workspace boundary.
    #[must_use]
    pub const fn with_workspace(mut self, workspace_id: WorkspaceId) -> Self {
        self.workspace_id = Some(workspace_id);
        self
    }

    /// Sets the project boundary.
    #[must_use]
    pub const fn with_project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Returns the acting user.
    #[must_use]
    pub const fn actor_id(&self) -> UserId {
        self.actor_id
    }

    /// Returns the workspace boundary, if set.
    #[must_use]
    pub const fn workspace_id(&self) -> Option<WorkspaceId> {
        self.workspace_id
    }

    /// Returns the project boundary, if set.
    #[must_use]
    pub const fn project_id(&self) -> Option<ProjectId> {
        self.project_id
    }
}
