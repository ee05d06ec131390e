//! Error types for patch validation and enum parsing.

use super::TaskField;
use crate::access::domain::UserId;
use thiserror::Error;

/// Error returned while parsing task enumerations from storage or transport.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task {field}: {value}")]
pub struct ParseTaskEnumError {
    /// Which enumeration failed to parse.
    pub field: &'static str,
    /// The offending input.
    pub value: String,
}

impl ParseTaskEnumError {
    pub(crate) fn status(value: &str) -> Self {
        Self {
            field: "status",
            value: value.to_owned(),
        }
    }

    pub(crate) fn priority(value: &str) -> Self {
        Self {
            field: "priority",
            value: value.to_owned(),
        }
    }

    pub(crate) fn kind(value: &str) -> Self {
        Self {
            field: "kind",
            value: value.to_owned(),
        }
    }
}

/// Errors returned while validating the fields present in a patch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PatchValidationError {
    /// A required field was explicitly set to null.
    #[error("field '{0}' cannot be set to null")]
    NullRequiredField(TaskField),

    /// The patched title is empty after trimming.
    #[error("title must not be blank")]
    BlankTitle,

    /// The patched assignee is not a member of the task's project or
    /// workspace.
    #[error("assignee {0} is not a member of the task's project or workspace")]
    AssigneeNotMember(UserId),
}
