//! Per-column inline quick-creation of tasks.

use crate::board::domain::{DraftChange, DraftValidationError, Task, TaskDraft, TaskStatus};
use crate::board::ports::{CollaboratorError, TaskCreator};
use crate::board::store::BoardStore;
use std::sync::Arc;
use tracing::{debug, warn};

/// Terminal outcome of one draft submission.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// No draft was open; nothing happened.
    Idle,
    /// The draft failed validation synchronously; no request was issued
    /// and the draft is intact.
    Rejected(DraftValidationError),
    /// The create collaborator confirmed the task; it now sits in the
    /// board store under its server-assigned identifier and create mode
    /// has exited.
    Created(Task),
    /// The create collaborator failed; the draft is preserved for retry
    /// and nothing was inserted into the store.
    Failed {
        /// Failure reported by the create collaborator.
        error: CollaboratorError,
    },
}

/// Stages a draft task scoped to one column and submits it for creation.
///
/// Unlike the drag path there is no prior persisted state to revert to,
/// so a failed submission preserves the draft instead of rolling back.
pub struct QuickCreateService<C>
where
    C: TaskCreator,
{
    store: BoardStore,
    creator: Arc<C>,
    draft: Option<TaskDraft>,
}

impl<C> QuickCreateService<C>
where
    C: TaskCreator,
{
    /// Creates a quick-create service over a board store.
    #[must_use]
    pub const fn new(store: BoardStore, creator: Arc<C>) -> Self {
        Self {
            store,
            creator,
            draft: None,
        }
    }

    /// Enters create mode scoped to `column`, replacing any prior draft
    /// with a blank one preset to that column.
    pub fn open(&mut self, column: TaskStatus) {
        debug!(column = %column, "quick-create opened");
        self.draft = Some(TaskDraft::blank(column));
    }

    /// Reports whether create mode is active.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    /// Returns the pending draft, if create mode is active.
    #[must_use]
    pub const fn draft(&self) -> Option<&TaskDraft> {
        self.draft.as_ref()
    }

    /// Applies one form edit to the pending draft.
    ///
    /// Returns `false` without effect when no draft is open.
    pub fn update_draft(&mut self, change: DraftChange) -> bool {
        match &mut self.draft {
            Some(draft) => {
                draft.apply(change);
                true
            }
            None => false,
        }
    }

    /// Discards the draft and exits create mode without any request.
    pub fn cancel(&mut self) {
        if self.draft.take().is_some() {
            debug!("quick-create cancelled");
        }
    }

    /// Validates and submits the pending draft.
    ///
    /// Validation runs synchronously and a rejected draft never reaches
    /// the collaborator. On confirmation the returned task is inserted
    /// into the board store and create mode exits; on failure the draft
    /// stays staged so the user may retry.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let Some(draft) = &self.draft else {
            return SubmitOutcome::Idle;
        };

        let new_task = match draft.validate() {
            Ok(new_task) => new_task,
            Err(error) => {
                debug!(%error, "quick-create draft rejected");
                return SubmitOutcome::Rejected(error);
            }
        };

        match self.creator.create_task(&new_task).await {
            Ok(task) => {
                debug!(task_id = %task.id(), column = %task.status(), "task created");
                self.store.insert(task.clone());
                self.draft = None;
                SubmitOutcome::Created(task)
            }
            Err(error) => {
                warn!(%error, "task creation failed, draft preserved");
                SubmitOutcome::Failed { error }
            }
        }
    }
}
