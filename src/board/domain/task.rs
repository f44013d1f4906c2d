//! Task record and the partial-update payload applied to it.

use super::{AssigneeRef, ProjectRef, TaskId, TaskPriority, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A unit of work rendered as one card on the board.
///
/// Tasks enter the board fully formed from a collaborator: the server
/// assigns the identifier and both timestamps, and the board never
/// recomputes either. Column membership is derived from [`Task::status`]
/// alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    status: TaskStatus,
    priority: TaskPriority,
    project: ProjectRef,
    assignee: Option<AssigneeRef>,
    due_date: Option<DateTime<Utc>>,
    estimated_hours: Option<f32>,
    actual_hours: Option<f32>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a task from collaborator data.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteTaskData {
    /// Server-assigned task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Optional long-form description.
    pub description: Option<String>,
    /// Workflow status (the column the task renders in).
    pub status: TaskStatus,
    /// Priority badge.
    pub priority: TaskPriority,
    /// Owning project reference.
    pub project: ProjectRef,
    /// Assigned user, if any.
    pub assignee: Option<AssigneeRef>,
    /// Due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Estimated effort in hours, display only.
    pub estimated_hours: Option<f32>,
    /// Recorded effort in hours, display only.
    pub actual_hours: Option<f32>,
    /// Server-side creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Server-side last-modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from collaborator-supplied data.
    #[must_use]
    pub fn from_remote(data: RemoteTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            project: data.project,
            assignee: data.assignee,
            due_date: data.due_date,
            estimated_hours: data.estimated_hours,
            actual_hours: data.actual_hours,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the long-form description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority badge.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the owning project reference.
    #[must_use]
    pub const fn project(&self) -> &ProjectRef {
        &self.project
    }

    /// Returns the assigned user, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<&AssigneeRef> {
        self.assignee.as_ref()
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the estimated effort in hours, if recorded.
    #[must_use]
    pub const fn estimated_hours(&self) -> Option<f32> {
        self.estimated_hours
    }

    /// Returns the actual effort in hours, if recorded.
    #[must_use]
    pub const fn actual_hours(&self) -> Option<f32> {
        self.actual_hours
    }

    /// Returns the server-side creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the server-side last-modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Reports whether the task should be highlighted as overdue.
    ///
    /// True when a due date exists, lies strictly before `now`, and the
    /// task is not completed. Display hint only; the board never enforces
    /// due dates.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.status != TaskStatus::Completed && self.due_date.is_some_and(|due| due < now)
    }

    /// Sets the last-modification timestamp.
    ///
    /// Timestamps belong to the persistence layer; the board's own
    /// mutation paths never call this.
    pub fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }

    /// Applies a partial update in place, leaving unset fields untouched.
    ///
    /// Timestamps are never modified here; `updated_at` belongs to the
    /// persistence collaborator.
    pub fn apply(&mut self, patch: &TaskPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(assignee) = &patch.assignee {
            self.assignee = Some(assignee.clone());
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = Some(due_date);
        }
        if let Some(estimated_hours) = patch.estimated_hours {
            self.estimated_hours = Some(estimated_hours);
        }
        if let Some(actual_hours) = patch.actual_hours {
            self.actual_hours = Some(actual_hours);
        }
    }
}

/// Partial update for one task; unset fields are left untouched.
///
/// Doubles as the update collaborator's request body: unset fields are
/// omitted from the serialized form entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskPatch {
    /// New title, when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description, when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New workflow status, when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    /// New priority badge, when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    /// New assignee, when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<AssigneeRef>,
    /// New due date, when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    /// New estimated effort in hours, when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f32>,
    /// New recorded effort in hours, when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_hours: Option<f32>,
}

impl TaskPatch {
    /// Creates a patch that only moves a task to `status`.
    ///
    /// This is the entire payload of a drag transition.
    #[must_use]
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}
