//! Error types for project business rules.

use crate::shared::{ProjectId, TaskId, UserId};
use thiserror::Error;

/// Business-rule violations raised by the project aggregate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The prospective assignee is not a member of the project.
    #[error("user {user_id} must be a member of project {project_id} to be assigned a task")]
    AssigneeNotMember {
        /// Project that rejected the assignment.
        project_id: ProjectId,
        /// User who is not a member.
        user_id: UserId,
    },

    /// The task does not belong to the project.
    #[error("task {task_id} not found in project {project_id}")]
    TaskNotFound {
        /// Project that was searched.
        project_id: ProjectId,
        /// Task that was not found.
        task_id: TaskId,
    },
}
