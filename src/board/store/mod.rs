//! Shared in-memory task collection for a mounted board view.
//!
//! The store is the single shared mutable resource of the board: the drag
//! and quick-create controllers and the external delete path all write to
//! it, and only through the named operations here. Visual grouping is a
//! pure function of each task's status; the store tracks no column state
//! of its own.

use crate::board::domain::{Task, TaskId, TaskPatch, TaskStatus};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Cloneable handle to the task collection of one board view.
///
/// Every operation takes the lock once and completes synchronously, so no
/// partial mutation is ever observable. Insertion order is preserved; the
/// board defines no secondary sort.
#[derive(Debug, Clone, Default)]
pub struct BoardStore {
    state: Arc<RwLock<Vec<Task>>>,
}

/// Result of a guarded status revert after a failed drag request.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusRevert {
    /// The task still carried the optimistic status and was restored.
    Reverted(Task),
    /// A newer transition already changed the status; nothing was touched.
    Superseded,
    /// The task has left the store; nothing was touched.
    Vanished,
}

impl BoardStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Task>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Task>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Seeds the store, replacing any prior state wholesale.
    pub fn initialize(&self, tasks: Vec<Task>) {
        *self.write() = tasks;
    }

    /// Returns a copy of the full collection in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Task> {
        self.read().clone()
    }

    /// Returns all tasks in the given column, in insertion order.
    ///
    /// The four columns partition the collection: pairwise disjoint, and
    /// their union is the full set.
    #[must_use]
    pub fn by_status(&self, status: TaskStatus) -> Vec<Task> {
        self.read()
            .iter()
            .filter(|task| task.status() == status)
            .cloned()
            .collect()
    }

    /// Returns a copy of the task with the given identifier.
    #[must_use]
    pub fn find(&self, id: &TaskId) -> Option<Task> {
        self.read().iter().find(|task| task.id() == id).cloned()
    }

    /// Returns a task's column and its index within that column.
    #[must_use]
    pub fn locate(&self, id: &TaskId) -> Option<(TaskStatus, usize)> {
        let tasks = self.read();
        let task = tasks.iter().find(|task| task.id() == id)?;
        let index = tasks
            .iter()
            .filter(|other| other.status() == task.status())
            .position(|other| other.id() == id)?;
        Some((task.status(), index))
    }

    /// Applies a partial update to exactly one task.
    ///
    /// Returns the updated task, or `None` when no task matches `id`; a
    /// missing id is a silent no-op since it indicates a race with an
    /// external delete.
    pub fn replace(&self, id: &TaskId, patch: &TaskPatch) -> Option<Task> {
        let mut tasks = self.write();
        let task = tasks.iter_mut().find(|task| task.id() == id)?;
        task.apply(patch);
        Some(task.clone())
    }

    /// Appends a confirmed task to the collection.
    pub fn insert(&self, task: Task) {
        self.write().push(task);
    }

    /// Removes the task with the given identifier.
    ///
    /// Returns the removed task, or `None` when no task matches `id`.
    pub fn remove(&self, id: &TaskId) -> Option<Task> {
        let mut tasks = self.write();
        let index = tasks.iter().position(|task| task.id() == id)?;
        Some(tasks.remove(index))
    }

    /// Restores a task's status to `prior`, but only while its current
    /// status still equals `applied`.
    ///
    /// This is the rollback primitive of the drag controller: the guard
    /// keeps a failed request's rollback scoped to the optimistic state
    /// that request itself applied, so it can never clobber a newer
    /// transition on the same task.
    pub fn revert_status(
        &self,
        id: &TaskId,
        applied: TaskStatus,
        prior: TaskStatus,
    ) -> StatusRevert {
        let mut tasks = self.write();
        let Some(task) = tasks.iter_mut().find(|task| task.id() == id) else {
            return StatusRevert::Vanished;
        };
        if task.status() != applied {
            return StatusRevert::Superseded;
        }
        task.apply(&TaskPatch::status(prior));
        StatusRevert::Reverted(task.clone())
    }

    /// Returns the number of tasks in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Reports whether the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
