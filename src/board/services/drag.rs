//! Drag-and-drop status transitions with optimistic apply and rollback.

use crate::board::domain::{Task, TaskId, TaskPatch, TaskStatus};
use crate::board::ports::{CollaboratorError, TaskUpdater};
use crate::board::store::{BoardStore, StatusRevert};
use std::sync::Arc;
use tracing::{debug, warn};

/// A drop gesture proposing a status transition.
///
/// The store, not the gesture, is the authority on the task's current
/// column: `source_status` is carried for display and logging, and a
/// stale value cannot corrupt the transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropRequest {
    /// Identifier of the dragged task.
    pub task_id: TaskId,
    /// Column the gesture started in.
    pub source_status: TaskStatus,
    /// Column the task was dropped onto.
    pub destination_status: TaskStatus,
    /// Position within the destination column the task was dropped at.
    pub destination_index: usize,
}

impl DropRequest {
    /// Creates a drop request from gesture data.
    #[must_use]
    pub const fn new(
        task_id: TaskId,
        source_status: TaskStatus,
        destination_status: TaskStatus,
        destination_index: usize,
    ) -> Self {
        Self {
            task_id,
            source_status,
            destination_status,
            destination_index,
        }
    }
}

/// Terminal outcome of one drop gesture.
///
/// Failures are carried in the outcome rather than propagated as errors:
/// nothing about a drop is fatal to the board, and the caller only needs
/// the result to display a notification.
#[derive(Debug)]
pub enum DropOutcome {
    /// The task is no longer in the store; nothing happened.
    Vanished,
    /// The drop named the task's current column and position; no request
    /// was issued.
    NoOp,
    /// The optimistic move was confirmed by the update collaborator.
    Committed(Task),
    /// The update failed and the status was restored to its value from
    /// immediately before this request.
    RolledBack {
        /// Status the task was restored to.
        prior: TaskStatus,
        /// Failure reported by the update collaborator.
        error: CollaboratorError,
    },
    /// The update failed, but a newer transition had already replaced the
    /// optimistic status; the newer state was left untouched.
    Superseded {
        /// Failure reported by the update collaborator.
        error: CollaboratorError,
    },
}

/// Routes every drag gesture through one transition path.
///
/// All four statuses transition to all four statuses; the board enforces
/// no linear workflow. The optimistic apply always happens before the
/// update request is issued, and the rollback or confirmation always
/// happens after the request settles.
pub struct DragTransitionService<U>
where
    U: TaskUpdater,
{
    store: BoardStore,
    updater: Arc<U>,
}

impl<U> Clone for DragTransitionService<U>
where
    U: TaskUpdater,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            updater: Arc::clone(&self.updater),
        }
    }
}

impl<U> DragTransitionService<U>
where
    U: TaskUpdater,
{
    /// Creates a drag transition service over a board store.
    #[must_use]
    pub const fn new(store: BoardStore, updater: Arc<U>) -> Self {
        Self { store, updater }
    }

    /// Resolves one drop gesture.
    ///
    /// Looks the task up, discards no-op drops without a request, applies
    /// the destination status optimistically, then reconciles with the
    /// update collaborator's terminal answer. The rollback value is the
    /// status read from the store immediately before this request, never
    /// the gesture's source column, and a rollback only lands while the
    /// task still carries the status this request applied.
    pub async fn handle_drop(&self, request: DropRequest) -> DropOutcome {
        let Some((current_status, current_index)) = self.store.locate(&request.task_id) else {
            debug!(task_id = %request.task_id, "drop ignored, task left the store");
            return DropOutcome::Vanished;
        };

        if request.destination_status == current_status
            && request.destination_index == current_index
        {
            debug!(task_id = %request.task_id, status = %current_status, "drop is a no-op");
            return DropOutcome::NoOp;
        }

        let prior = current_status;
        let patch = TaskPatch::status(request.destination_status);
        if self.store.replace(&request.task_id, &patch).is_none() {
            return DropOutcome::Vanished;
        }
        debug!(
            task_id = %request.task_id,
            from = %prior,
            to = %request.destination_status,
            "status applied optimistically"
        );

        match self.updater.update_task(&request.task_id, &patch).await {
            Ok(()) => {
                debug!(task_id = %request.task_id, status = %request.destination_status, "transition committed");
                self.store
                    .find(&request.task_id)
                    .map_or(DropOutcome::Vanished, DropOutcome::Committed)
            }
            Err(error) => self.roll_back(&request, prior, error),
        }
    }

    fn roll_back(
        &self,
        request: &DropRequest,
        prior: TaskStatus,
        error: CollaboratorError,
    ) -> DropOutcome {
        match self
            .store
            .revert_status(&request.task_id, request.destination_status, prior)
        {
            StatusRevert::Reverted(_) => {
                warn!(
                    task_id = %request.task_id,
                    restored = %prior,
                    %error,
                    "transition failed, status rolled back"
                );
                DropOutcome::RolledBack { prior, error }
            }
            StatusRevert::Superseded => {
                warn!(
                    task_id = %request.task_id,
                    %error,
                    "transition failed after a newer transition, rollback skipped"
                );
                DropOutcome::Superseded { error }
            }
            StatusRevert::Vanished => DropOutcome::Vanished,
        }
    }
}
