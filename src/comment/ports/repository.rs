//! Repository port for the comment aggregate.

use crate::comment::domain::Comment;
use crate::persistence::RepositoryResult;
use crate::shared::CommentId;
use async_trait::async_trait;

/// Comment persistence contract.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Creates or overwrites a comment. The stored creation timestamp is
    /// never changed by an overwrite.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`](crate::persistence::RepositoryError) when
    /// storage fails.
    async fn save(&self, comment: &Comment) -> RepositoryResult<()>;

    /// Finds a comment by identifier.
    ///
    /// Returns `None` when the comment does not exist.
    async fn find_by_id(&self, id: &CommentId) -> RepositoryResult<Option<Comment>>;

    /// Deletes a comment. Deleting an absent comment succeeds.
    async fn delete(&self, id: &CommentId) -> RepositoryResult<()>;
}
