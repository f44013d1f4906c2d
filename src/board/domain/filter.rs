//! Pure filter predicates narrowing the visible task set.

use super::{ProjectId, Task, UserId};

/// Filter predicate set for the board view.
///
/// Set predicates are ANDed together; an unset predicate matches every
/// task. Filtering is a pure projection: it never mutates the underlying
/// collection and must be reapplied whenever either the predicate or the
/// collection changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardFilter {
    project: Option<ProjectId>,
    assignee: Option<UserId>,
}

impl BoardFilter {
    /// Creates a filter that matches every task.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            project: None,
            assignee: None,
        }
    }

    /// Restricts matches to tasks owned by `project`.
    #[must_use]
    pub fn with_project(mut self, project: ProjectId) -> Self {
        self.project = Some(project);
        self
    }

    /// Restricts matches to tasks assigned to `assignee`.
    #[must_use]
    pub fn with_assignee(mut self, assignee: UserId) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Returns the project predicate, if set.
    #[must_use]
    pub const fn project(&self) -> Option<&ProjectId> {
        self.project.as_ref()
    }

    /// Returns the assignee predicate, if set.
    #[must_use]
    pub const fn assignee(&self) -> Option<&UserId> {
        self.assignee.as_ref()
    }

    /// Reports whether a task satisfies every set predicate.
    ///
    /// An unassigned task never matches an assignee predicate.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        let project_ok = self
            .project
            .as_ref()
            .is_none_or(|wanted| task.project().id() == wanted);
        let assignee_ok = self
            .assignee
            .as_ref()
            .is_none_or(|wanted| task.assignee().is_some_and(|a| a.id() == wanted));
        project_ok && assignee_ok
    }

    /// Projects the matching subset out of `tasks`, preserving order.
    #[must_use]
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        tasks
            .iter()
            .filter(|task| self.matches(task))
            .cloned()
            .collect()
    }
}
