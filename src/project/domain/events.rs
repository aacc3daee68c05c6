//! Events recorded by the project aggregate.

use crate::shared::{ProjectId, TaskId, UserId};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Immutable fact recorded by a [`Project`](super::Project).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProjectEvent {
    /// A user joined the project.
    MemberAdded {
        /// Project the user joined.
        project_id: ProjectId,
        /// The new member.
        member_id: UserId,
        /// When the member was added.
        occurred_at: DateTime<Utc>,
    },
    /// A task was created inside the project.
    TaskCreated {
        /// The new task.
        task_id: TaskId,
        /// Owning project.
        project_id: ProjectId,
        /// When the task was created.
        occurred_at: DateTime<Utc>,
    },
    /// A task was assigned to a project member.
    TaskAssigned {
        /// Owning project.
        project_id: ProjectId,
        /// The assigned task.
        task_id: TaskId,
        /// The member now responsible for the task.
        assignee_id: UserId,
        /// When the assignment happened.
        occurred_at: DateTime<Utc>,
    },
}

impl ProjectEvent {
    /// Returns the event name in snake case.
    #[must_use]
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::MemberAdded { .. } => "member_added",
            Self::TaskCreated { .. } => "task_created",
            Self::TaskAssigned { .. } => "task_assigned",
        }
    }

    /// Returns the project the event belongs to.
    #[must_use]
    pub const fn project_id(&self) -> &ProjectId {
        match self {
            Self::MemberAdded { project_id, .. }
            | Self::TaskCreated { project_id, .. }
            | Self::TaskAssigned { project_id, .. } => project_id,
        }
    }

    /// Returns when the event occurred.
    #[must_use]
    pub const fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Self::MemberAdded { occurred_at, .. }
            | Self::TaskCreated { occurred_at, .. }
            | Self::TaskAssigned { occurred_at, .. } => *occurred_at,
        }
    }
}
