//! Shared fixtures and scripted collaborators for board tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use tokio::sync::oneshot;

use crate::board::domain::{
    AssigneeRef, NewTask, ProjectId, ProjectRef, RemoteTaskData, Task, TaskId, TaskPatch,
    TaskPriority, TaskStatus, UserId,
};
use crate::board::ports::{CollaboratorError, CollaboratorResult, TaskCreator, TaskUpdater};

/// Fixed timestamp used for seeded tasks.
pub fn seeded_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub fn project(id: &str, name: &str) -> ProjectRef {
    ProjectRef::new(ProjectId::new(id), name, format!("{name} Holdings"))
}

pub fn assignee(id: &str, name: &str) -> AssigneeRef {
    AssigneeRef::new(UserId::new(id), name, format!("{id}@agency.example"))
}

/// Builds a persisted-shape task owned by `project` with no assignee.
pub fn task(id: &str, title: &str, status: TaskStatus, project: &ProjectRef) -> Task {
    Task::from_remote(RemoteTaskData {
        id: TaskId::new(id),
        title: title.to_owned(),
        description: None,
        status,
        priority: TaskPriority::Medium,
        project: project.clone(),
        assignee: None,
        due_date: None,
        estimated_hours: None,
        actual_hours: None,
        created_at: seeded_at(),
        updated_at: seeded_at(),
    })
}

/// Builds a persisted-shape task with an assignee.
pub fn assigned_task(
    id: &str,
    title: &str,
    status: TaskStatus,
    project: &ProjectRef,
    owner: &AssigneeRef,
) -> Task {
    Task::from_remote(RemoteTaskData {
        id: TaskId::new(id),
        title: title.to_owned(),
        description: None,
        status,
        priority: TaskPriority::Medium,
        project: project.clone(),
        assignee: Some(owner.clone()),
        due_date: None,
        estimated_hours: None,
        actual_hours: None,
        created_at: seeded_at(),
        updated_at: seeded_at(),
    })
}

/// Confirms a creation payload the way a server would.
pub fn confirm(new_task: &NewTask, id: &str, at: DateTime<Utc>) -> Task {
    Task::from_remote(RemoteTaskData {
        id: TaskId::new(id),
        title: new_task.title().to_owned(),
        description: new_task.description().map(ToOwned::to_owned),
        status: new_task.status(),
        priority: new_task.priority(),
        project: new_task.project().clone(),
        assignee: new_task.assignee().cloned(),
        due_date: new_task.due_date(),
        estimated_hours: new_task.estimated_hours(),
        actual_hours: None,
        created_at: at,
        updated_at: at,
    })
}

/// Update collaborator that records every request and replays a script.
///
/// Unscripted calls succeed.
#[derive(Default)]
pub struct RecordingUpdater {
    calls: AtomicUsize,
    script: Mutex<VecDeque<CollaboratorResult<()>>>,
    requests: Mutex<Vec<(TaskId, TaskPatch)>>,
}

impl RecordingUpdater {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&self, result: CollaboratorResult<()>) {
        self.script.lock().expect("script lock").push_back(result);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<(TaskId, TaskPatch)> {
        self.requests.lock().expect("requests lock").clone()
    }
}

#[async_trait]
impl TaskUpdater for RecordingUpdater {
    async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> CollaboratorResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .expect("requests lock")
            .push((id.clone(), patch.clone()));
        self.script
            .lock()
            .expect("script lock")
            .pop_front()
            .unwrap_or(Ok(()))
    }
}

/// Update collaborator whose first request blocks until released, then
/// fails.
///
/// Used to overlap two requests for the same task deterministically. The
/// first call signals `entered`, waits on `release`, and returns a
/// rejection; every later call succeeds immediately.
pub struct GatedUpdater {
    calls: AtomicUsize,
    entered: Mutex<Option<oneshot::Sender<()>>>,
    release: Mutex<Option<oneshot::Receiver<()>>>,
}

impl GatedUpdater {
    pub fn new() -> (Self, oneshot::Receiver<()>, oneshot::Sender<()>) {
        let (entered_tx, entered_rx) = oneshot::channel();
        let (release_tx, release_rx) = oneshot::channel();
        let updater = Self {
            calls: AtomicUsize::new(0),
            entered: Mutex::new(Some(entered_tx)),
            release: Mutex::new(Some(release_rx)),
        };
        (updater, entered_rx, release_tx)
    }
}

#[async_trait]
impl TaskUpdater for GatedUpdater {
    async fn update_task(&self, _id: &TaskId, _patch: &TaskPatch) -> CollaboratorResult<()> {
        if self.calls.fetch_add(1, Ordering::SeqCst) > 0 {
            return Ok(());
        }
        if let Some(entered) = self.entered.lock().expect("gate lock").take() {
            entered.send(()).ok();
        }
        let release = self.release.lock().expect("gate lock").take();
        if let Some(release) = release {
            release.await.ok();
        }
        Err(CollaboratorError::rejected("simulated late failure"))
    }
}

/// One scripted answer for the create collaborator.
pub enum CreateScript {
    /// Confirm the payload under the given server-assigned id.
    Succeed(String),
    /// Fail with the given error.
    Fail(CollaboratorError),
}

/// Create collaborator that counts requests and replays a script.
///
/// Unscripted calls are rejected.
#[derive(Default)]
pub struct ScriptedCreator {
    calls: AtomicUsize,
    script: Mutex<VecDeque<CreateScript>>,
}

impl ScriptedCreator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue_success(&self, id: &str) {
        self.script
            .lock()
            .expect("script lock")
            .push_back(CreateScript::Succeed(id.to_owned()));
    }

    pub fn enqueue_failure(&self, error: CollaboratorError) {
        self.script
            .lock()
            .expect("script lock")
            .push_back(CreateScript::Fail(error));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TaskCreator for ScriptedCreator {
    async fn create_task(&self, new_task: &NewTask) -> CollaboratorResult<Task> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.script.lock().expect("script lock").pop_front() {
            Some(CreateScript::Succeed(id)) => Ok(confirm(new_task, &id, seeded_at())),
            Some(CreateScript::Fail(error)) => Err(error),
            None => Err(CollaboratorError::rejected("unscripted create")),
        }
    }
}
