//! Handlers for posting, editing, and deleting comments.

use crate::comment::{
    domain::{Comment, CommentDomainError, CommentEvent},
    ports::CommentRepository,
};
use crate::persistence::RepositoryError;
use crate::shared::{CommandOutcome, CommentId, IdentifierError, TaskId, UserId};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for posting a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommentRequest {
    task_id: String,
    author_id: String,
    content: String,
}

impl AddCommentRequest {
    /// Creates a request for a comment by `author_id` on `task_id`.
    #[must_use]
    pub fn new(
        task_id: impl Into<String>,
        author_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            author_id: author_id.into(),
            content: content.into(),
        }
    }
}

/// Service-level errors for comment use cases.
#[derive(Debug, Error)]
pub enum CommentServiceError {
    /// An identifier in the request was blank.
    #[error(transparent)]
    Identifier(#[from] IdentifierError),
    /// Comment validation failed.
    #[error(transparent)]
    Domain(#[from] CommentDomainError),
    /// No comment is stored under the identifier.
    #[error("comment not found: {0}")]
    CommentNotFound(CommentId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result type for comment service operations.
pub type CommentServiceResult<T> = Result<T, CommentServiceError>;

/// Comment use-case orchestration.
#[derive(Clone)]
pub struct CommentService<R, C>
where
    R: CommentRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> CommentService<R, C>
where
    R: CommentRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new comment service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Posts a comment with a freshly generated identifier.
    ///
    /// The task is referenced by identifier only and is not looked up.
    ///
    /// # Errors
    ///
    /// Returns [`CommentServiceError`] when an identifier is blank, the
    /// content is empty, or the repository rejects persistence.
    pub async fn add_comment(
        &self,
        request: AddCommentRequest,
    ) -> CommentServiceResult<CommandOutcome<Comment, CommentEvent>> {
        let mut comment = Comment::create(
            CommentId::generate(),
            TaskId::new(request.task_id)?,
            UserId::new(request.author_id)?,
            request.content,
            &*self.clock,
        )?;
        self.repository.save(&comment).await?;
        let events = comment.pull_domain_events();
        for event in &events {
            debug!(
                event_type = event.event_type(),
                occurred_at = %event.occurred_at(),
                "comment event recorded"
            );
        }
        info!(comment_id = %comment.id(), task_id = %comment.task_id(), "comment added");
        Ok(CommandOutcome::new(comment, events))
    }

    /// Replaces a stored comment's content.
    ///
    /// # Errors
    ///
    /// Returns [`CommentServiceError::Domain`] for empty content,
    /// [`CommentServiceError::CommentNotFound`] for an unknown comment, or
    /// [`CommentServiceError::Repository`] on storage failure.
    pub async fn edit_comment(
        &self,
        comment_id: &str,
        content: &str,
    ) -> CommentServiceResult<Comment> {
        let mut comment = self.load(comment_id).await?;
        comment.update(content)?;
        self.repository.save(&comment).await?;
        info!(comment_id = %comment.id(), "comment edited");
        Ok(comment)
    }

    /// Deletes a comment. Deleting an unknown comment succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`CommentServiceError`] when the identifier is blank or the
    /// repository fails.
    pub async fn delete_comment(&self, comment_id: &str) -> CommentServiceResult<()> {
        let id = CommentId::new(comment_id)?;
        self.repository.delete(&id).await?;
        info!(comment_id = %id, "comment deleted");
        Ok(())
    }

    /// Loads a comment.
    ///
    /// # Errors
    ///
    /// Returns [`CommentServiceError::CommentNotFound`] when the comment
    /// does not exist.
    pub async fn find_comment(&self, comment_id: &str) -> CommentServiceResult<Comment> {
        self.load(comment_id).await
    }

    async fn load(&self, comment_id: &str) -> CommentServiceResult<Comment> {
        let id = CommentId::new(comment_id)?;
        let stored = self.repository.find_by_id(&id).await?;
        stored.ok_or(CommentServiceError::CommentNotFound(id))
    }
}
