//! In-memory backend implementing every collaborator port.
//!
//! Stand-in for the dashboard API in tests and local development: it
//! assigns identifiers and timestamps the way the server would, preserves
//! insertion order for seeding, and offers one-shot failure injection plus
//! call counters for exercising the optimistic paths.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::{Arc, PoisonError, RwLock};
use uuid::Uuid;

use crate::board::domain::{
    AssigneeRef, NewTask, ProjectRef, RemoteTaskData, Task, TaskId, TaskPatch,
};
use crate::board::ports::{
    BoardSeed, CollaboratorError, CollaboratorResult, TaskCreator, TaskRemover, TaskSource,
    TaskUpdater,
};

/// Thread-safe in-memory board backend.
#[derive(Debug)]
pub struct InMemoryBoardBackend<C>
where
    C: Clock + Send + Sync,
{
    state: Arc<RwLock<BackendState>>,
    clock: Arc<C>,
}

#[derive(Debug, Default)]
struct BackendState {
    tasks: Vec<Task>,
    projects: Vec<ProjectRef>,
    assignees: Vec<AssigneeRef>,
    update_calls: usize,
    create_calls: usize,
    remove_calls: usize,
    fail_next_update: Option<String>,
    fail_next_create: Option<String>,
    fail_next_remove: Option<String>,
}

impl<C> Clone for InMemoryBoardBackend<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

fn lock_error<T>(err: &PoisonError<T>) -> CollaboratorError {
    CollaboratorError::transport(std::io::Error::other(err.to_string()))
}

fn build_task(new_task: &NewTask, id: TaskId, now: DateTime<Utc>) -> Task {
    Task::from_remote(RemoteTaskData {
        id,
        title: new_task.title().to_owned(),
        description: new_task.description().map(ToOwned::to_owned),
        status: new_task.status(),
        priority: new_task.priority(),
        project: new_task.project().clone(),
        assignee: new_task.assignee().cloned(),
        due_date: new_task.due_date(),
        estimated_hours: new_task.estimated_hours(),
        actual_hours: None,
        created_at: now,
        updated_at: now,
    })
}

impl<C> InMemoryBoardBackend<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty backend over the given clock.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(BackendState::default())),
            clock,
        }
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut BackendState) -> T) -> T {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }

    /// Adds a project to the quick-create catalog.
    pub fn seed_project(&self, project: ProjectRef) {
        self.with_state(|state| state.projects.push(project));
    }

    /// Adds a user to the assignable-user catalog.
    pub fn seed_assignee(&self, assignee: AssigneeRef) {
        self.with_state(|state| state.assignees.push(assignee));
    }

    /// Persists a task directly, minting its identifier and timestamps.
    ///
    /// Seeding path for tests; does not count as a create call.
    pub fn seed_task(&self, new_task: &NewTask) -> Task {
        let task = build_task(new_task, mint_task_id(), self.clock.utc());
        self.with_state(|state| state.tasks.push(task.clone()));
        task
    }

    /// Makes the next update request fail with the given reason.
    pub fn fail_next_update(&self, reason: impl Into<String>) {
        let reason = reason.into();
        self.with_state(|state| state.fail_next_update = Some(reason));
    }

    /// Makes the next create request fail with the given reason.
    pub fn fail_next_create(&self, reason: impl Into<String>) {
        let reason = reason.into();
        self.with_state(|state| state.fail_next_create = Some(reason));
    }

    /// Makes the next remove request fail with the given reason.
    pub fn fail_next_remove(&self, reason: impl Into<String>) {
        let reason = reason.into();
        self.with_state(|state| state.fail_next_remove = Some(reason));
    }

    /// Returns how many update requests have been received.
    #[must_use]
    pub fn update_calls(&self) -> usize {
        self.with_state(|state| state.update_calls)
    }

    /// Returns how many create requests have been received.
    #[must_use]
    pub fn create_calls(&self) -> usize {
        self.with_state(|state| state.create_calls)
    }

    /// Returns how many remove requests have been received.
    #[must_use]
    pub fn remove_calls(&self) -> usize {
        self.with_state(|state| state.remove_calls)
    }

    /// Returns a copy of the persisted task with the given identifier.
    #[must_use]
    pub fn persisted(&self, id: &TaskId) -> Option<Task> {
        self.with_state(|state| state.tasks.iter().find(|task| task.id() == id).cloned())
    }
}

/// Mints a server-style opaque task identifier.
fn mint_task_id() -> TaskId {
    TaskId::new(Uuid::new_v4().to_string())
}

#[async_trait]
impl<C> TaskSource for InMemoryBoardBackend<C>
where
    C: Clock + Send + Sync,
{
    async fn load_board(&self) -> CollaboratorResult<BoardSeed> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        Ok(BoardSeed {
            tasks: state.tasks.clone(),
            projects: state.projects.clone(),
            assignees: state.assignees.clone(),
        })
    }
}

#[async_trait]
impl<C> TaskUpdater for InMemoryBoardBackend<C>
where
    C: Clock + Send + Sync,
{
    async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> CollaboratorResult<()> {
        let now = self.clock.utc();
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        state.update_calls += 1;
        if let Some(reason) = state.fail_next_update.take() {
            return Err(CollaboratorError::rejected(reason));
        }
        let task = state
            .tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or_else(|| CollaboratorError::NotFound(id.clone()))?;
        task.apply(patch);
        task.touch(now);
        Ok(())
    }
}

#[async_trait]
impl<C> TaskCreator for InMemoryBoardBackend<C>
where
    C: Clock + Send + Sync,
{
    async fn create_task(&self, new_task: &NewTask) -> CollaboratorResult<Task> {
        let now = self.clock.utc();
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        state.create_calls += 1;
        if let Some(reason) = state.fail_next_create.take() {
            return Err(CollaboratorError::rejected(reason));
        }
        let task = build_task(new_task, mint_task_id(), now);
        state.tasks.push(task.clone());
        Ok(task)
    }
}

#[async_trait]
impl<C> TaskRemover for InMemoryBoardBackend<C>
where
    C: Clock + Send + Sync,
{
    async fn remove_task(&self, id: &TaskId) -> CollaboratorResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        state.remove_calls += 1;
        if let Some(reason) = state.fail_next_remove.take() {
            return Err(CollaboratorError::rejected(reason));
        }
        let index = state
            .tasks
            .iter()
            .position(|task| task.id() == id)
            .ok_or_else(|| CollaboratorError::NotFound(id.clone()))?;
        state.tasks.remove(index);
        Ok(())
    }
}
