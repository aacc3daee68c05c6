//! Task entity.

use super::TaskStatus;
use crate::shared::{ProjectId, TaskId, UserId};
use serde::Serialize;

/// Task entity, owned by exactly one project for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    title: String,
    description: String,
    status: TaskStatus,
    assignee_id: Option<UserId>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owning project.
    pub project_id: ProjectId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted assignee, if any.
    pub assignee_id: Option<UserId>,
}

impl Task {
    /// Creates a pending, unassigned task bound to `project_id`.
    pub(crate) fn create(
        id: TaskId,
        project_id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            project_id,
            title: title.into(),
            description: description.into(),
            status: TaskStatus::Pending,
            assignee_id: None,
        }
    }

    /// Reconstructs a task from persisted storage without re-running any
    /// creation rules.
    pub(crate) fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            title: data.title,
            description: data.description,
            status: data.status,
            assignee_id: data.assignee_id,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the owning project identifier.
    #[must_use]
    pub const fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assignee_id(&self) -> Option<&UserId> {
        self.assignee_id.as_ref()
    }

    /// Sets the assignee.
    ///
    /// Membership is not checked here; callers must go through
    /// [`Project::assign_task`](crate::project::domain::Project::assign_task).
    pub(crate) fn assign_to(&mut self, user_id: UserId) {
        self.assignee_id = Some(user_id);
    }

    /// Sets the lifecycle status. Any status may follow any other.
    pub const fn mark_as(&mut self, status: TaskStatus) {
        self.status = status;
    }
}
