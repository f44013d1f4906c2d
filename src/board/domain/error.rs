//! Error types for board domain validation and parsing.

use thiserror::Error;

/// Errors raised when a quick-create draft fails pre-submission checks.
///
/// These are caught synchronously before any collaborator call: a rejected
/// draft never produces a network request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DraftValidationError {
    /// The draft title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// No owning project has been selected for the draft.
    #[error("a project must be selected before the task can be created")]
    MissingProject,
}

/// Error returned while parsing task statuses from their wire form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities from their wire form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);
