//! Quick-create draft and the validated creation payload built from it.

use super::{AssigneeRef, DraftValidationError, ProjectRef, TaskPriority, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Validated payload handed to the create collaborator.
///
/// Unlike a draft, a `NewTask` always carries a non-empty title and an
/// owning project. It has no identifier and no timestamps; both are
/// assigned by the server on confirmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    title: String,
    description: Option<String>,
    status: TaskStatus,
    priority: TaskPriority,
    project: ProjectRef,
    assignee: Option<AssigneeRef>,
    due_date: Option<DateTime<Utc>>,
    estimated_hours: Option<f32>,
}

impl NewTask {
    /// Creates a payload with the required fields.
    ///
    /// The status defaults to [`TaskStatus::Todo`] and the priority to
    /// [`TaskPriority::Medium`].
    ///
    /// # Errors
    ///
    /// Returns [`DraftValidationError::EmptyTitle`] when the title is
    /// empty after trimming.
    pub fn new(title: impl Into<String>, project: ProjectRef) -> Result<Self, DraftValidationError> {
        let title = title.into();
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(DraftValidationError::EmptyTitle);
        }
        Ok(Self {
            title: trimmed.to_owned(),
            description: None,
            status: TaskStatus::Todo,
            priority: TaskPriority::default(),
            project,
            assignee: None,
            due_date: None,
            estimated_hours: None,
        })
    }

    /// Sets the workflow status the task should be created in.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the long-form description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority badge.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the assigned user.
    #[must_use]
    pub fn with_assignee(mut self, assignee: AssigneeRef) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the estimated effort in hours.
    #[must_use]
    pub const fn with_estimated_hours(mut self, hours: f32) -> Self {
        self.estimated_hours = Some(hours);
        self
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

    /// Returns the workflow status the task will be created in.
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

    /// Returns the estimated effort in hours, if set.
    #[must_use]
    pub const fn estimated_hours(&self) -> Option<f32> {
        self.estimated_hours
    }
}

/// One edit to a pending quick-create draft.
///
/// Routing every form input through this closed set keeps draft mutation
/// auditable, the same way store mutation goes through named operations.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftChange {
    /// Replace the title text.
    Title(String),
    /// Replace or clear the description.
    Description(Option<String>),
    /// Replace the priority badge.
    Priority(TaskPriority),
    /// Select or clear the owning project.
    Project(Option<ProjectRef>),
    /// Select or clear the assignee.
    Assignee(Option<AssigneeRef>),
    /// Set or clear the due date.
    DueDate(Option<DateTime<Utc>>),
    /// Set or clear the estimated effort.
    EstimatedHours(Option<f32>),
}

/// In-progress, unpersisted task staged by the quick-create flow.
///
/// A draft has no identifier: the task it describes enters existence only
/// once the create collaborator confirms it.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    status: TaskStatus,
    title: String,
    description: Option<String>,
    priority: TaskPriority,
    project: Option<ProjectRef>,
    assignee: Option<AssigneeRef>,
    due_date: Option<DateTime<Utc>>,
    estimated_hours: Option<f32>,
}

impl TaskDraft {
    /// Creates a blank draft preset to the given column.
    #[must_use]
    pub const fn blank(status: TaskStatus) -> Self {
        Self {
            status,
            title: String::new(),
            description: None,
            priority: TaskPriority::Medium,
            project: None,
            assignee: None,
            due_date: None,
            estimated_hours: None,
        }
    }

    /// Applies one form edit to the draft.
    pub fn apply(&mut self, change: DraftChange) {
        match change {
            DraftChange::Title(title) => self.title = title,
            DraftChange::Description(description) => self.description = description,
            DraftChange::Priority(priority) => self.priority = priority,
            DraftChange::Project(project) => self.project = project,
            DraftChange::Assignee(assignee) => self.assignee = assignee,
            DraftChange::DueDate(due_date) => self.due_date = due_date,
            DraftChange::EstimatedHours(hours) => self.estimated_hours = hours,
        }
    }

    /// Returns the column the draft is scoped to.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the current title text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the current description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the current priority selection.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the selected project, if any.
    #[must_use]
    pub const fn project(&self) -> Option<&ProjectRef> {
        self.project.as_ref()
    }

    /// Returns the selected assignee, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<&AssigneeRef> {
        self.assignee.as_ref()
    }

    /// Returns the selected due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the estimated effort, if entered.
    #[must_use]
    pub const fn estimated_hours(&self) -> Option<f32> {
        self.estimated_hours
    }

    /// Validates the draft into a creation payload.
    ///
    /// # Errors
    ///
    /// Returns [`DraftValidationError::EmptyTitle`] when the title is
    /// empty after trimming, or [`DraftValidationError::MissingProject`]
    /// when no project is selected. The draft itself is left untouched
    /// either way.
    pub fn validate(&self) -> Result<NewTask, DraftValidationError> {
        let project = self
            .project
            .clone()
            .ok_or(DraftValidationError::MissingProject)?;
        let mut new_task = NewTask::new(self.title.clone(), project)?
            .with_status(self.status)
            .with_priority(self.priority);
        if let Some(description) = &self.description {
            new_task = new_task.with_description(description.clone());
        }
        if let Some(assignee) = &self.assignee {
            new_task = new_task.with_assignee(assignee.clone());
        }
        if let Some(due_date) = self.due_date {
            new_task = new_task.with_due_date(due_date);
        }
        if let Some(hours) = self.estimated_hours {
            new_task = new_task.with_estimated_hours(hours);
        }
        Ok(new_task)
    }
}
