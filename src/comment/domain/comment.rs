//! Comment aggregate root.

use super::{CommentDomainError, CommentEvent};
use crate::shared::{CommentId, EventRecorder, TaskId, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Comment aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    id: CommentId,
    task_id: TaskId,
    author_id: UserId,
    content: String,
    created_at: DateTime<Utc>,
    events: EventRecorder<CommentEvent>,
}

/// Parameter object for reconstructing a persisted comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedCommentData {
    /// Persisted comment identifier.
    pub id: CommentId,
    /// Persisted task reference.
    pub task_id: TaskId,
    /// Persisted author reference.
    pub author_id: UserId,
    /// Persisted content.
    pub content: String,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Creates a comment and records [`CommentEvent::CommentAdded`].
    ///
    /// # Errors
    ///
    /// Returns [`CommentDomainError::EmptyContent`] when the content is empty
    /// after trimming.
    pub fn create(
        id: CommentId,
        task_id: TaskId,
        author_id: UserId,
        content: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, CommentDomainError> {
        let body = non_blank(content.into())?;
        let created_at = clock.utc();
        let mut comment = Self {
            id,
            task_id,
            author_id,
            content: body,
            created_at,
            events: EventRecorder::new(),
        };
        comment.events.record(CommentEvent::CommentAdded {
            comment_id: comment.id.clone(),
            occurred_at: created_at,
        });
        Ok(comment)
    }

    /// Reconstructs a comment from persisted storage.
    pub(crate) fn from_persisted(data: PersistedCommentData) -> Self {
        Self {
            id: data.id,
            task_id: data.task_id,
            author_id: data.author_id,
            content: data.content,
            created_at: data.created_at,
            events: EventRecorder::new(),
        }
    }

    /// Returns the comment identifier.
    #[must_use]
    pub const fn id(&self) -> &CommentId {
        &self.id
    }

    /// Returns the commented task.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    /// Returns the author.
    #[must_use]
    pub const fn author_id(&self) -> &UserId {
        &self.author_id
    }

    /// Returns the comment body.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces the comment body.
    ///
    /// # Errors
    ///
    /// Returns [`CommentDomainError::EmptyContent`] when the new content is
    /// empty after trimming; the existing body is left untouched.
    pub fn update(&mut self, new_content: impl Into<String>) -> Result<(), CommentDomainError> {
        self.content = non_blank(new_content.into())?;
        Ok(())
    }

    /// Returns the recorded events and clears the buffer.
    #[must_use]
    pub fn pull_domain_events(&mut self) -> Vec<CommentEvent> {
        self.events.drain()
    }
}

fn non_blank(content: String) -> Result<String, CommentDomainError> {
    if content.trim().is_empty() {
        return Err(CommentDomainError::EmptyContent);
    }
    Ok(content)
}
