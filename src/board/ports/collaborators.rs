//! Collaborator ports for board seeding and task persistence.
//!
//! The board consumes its surrounding system through these narrow
//! contracts; no wire format or transport detail leaks past them. An
//! update request either eventually succeeds or eventually fails, and the
//! controllers react to whichever terminal outcome arrives.

use crate::board::domain::{AssigneeRef, NewTask, ProjectRef, Task, TaskId, TaskPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for collaborator operations.
pub type CollaboratorResult<T> = Result<T, CollaboratorError>;

/// Initial payload used to seed a mounted board view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoardSeed {
    /// Every task visible to the board, in persistence order.
    pub tasks: Vec<Task>,
    /// Catalog of projects selectable in quick-create.
    pub projects: Vec<ProjectRef>,
    /// Catalog of assignable users selectable in quick-create.
    pub assignees: Vec<AssigneeRef>,
}

/// Supplies the initial task list and the quick-create catalogs.
#[async_trait]
pub trait TaskSource: Send + Sync {
    /// Loads the full board seed.
    async fn load_board(&self) -> CollaboratorResult<BoardSeed>;
}

/// Accepts partial updates to an existing task.
#[async_trait]
pub trait TaskUpdater: Send + Sync {
    /// Applies `patch` to the task identified by `id`.
    ///
    /// Implementations must be idempotent-safe when called twice with the
    /// same status value: drag reorders within a column resend the
    /// current status.
    ///
    /// # Errors
    ///
    /// Returns [`CollaboratorError::NotFound`] when the task no longer
    /// exists, or another variant when persistence rejects the update.
    async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> CollaboratorResult<()>;
}

/// Accepts new-task payloads and returns the persisted task.
#[async_trait]
pub trait TaskCreator: Send + Sync {
    /// Persists `new_task` and returns the fully formed task, including
    /// its server-assigned identifier and timestamps.
    ///
    /// # Errors
    ///
    /// Returns a [`CollaboratorError`] when persistence rejects the
    /// creation; no partial task exists afterwards.
    async fn create_task(&self, new_task: &NewTask) -> CollaboratorResult<Task>;
}

/// Accepts task deletions.
///
/// Consumed by external delete UI rather than by the board's own
/// controllers; on confirmation the caller removes the task from the
/// board store as well.
#[async_trait]
pub trait TaskRemover: Send + Sync {
    /// Deletes the task identified by `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CollaboratorError::NotFound`] when the task no longer
    /// exists, or another variant when persistence rejects the deletion.
    async fn remove_task(&self, id: &TaskId) -> CollaboratorResult<()>;
}

/// Errors surfaced by collaborator implementations.
#[derive(Debug, Clone, Error)]
pub enum CollaboratorError {
    /// The referenced task no longer exists on the server.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The server refused the request.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// The request never reached a terminal server answer.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl CollaboratorError {
    /// Wraps a rejection reason.
    #[must_use]
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }

    /// Wraps a transport-level failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
