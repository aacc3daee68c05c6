//! Repository port for the project aggregate.

use crate::persistence::RepositoryResult;
use crate::project::domain::Project;
use crate::shared::ProjectId;
use async_trait::async_trait;

/// Project persistence contract.
///
/// Implementations persist the whole aggregate: root fields, the complete
/// member set, and every owned task.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Creates or overwrites the stored project.
    ///
    /// Stored membership is replaced by exactly the aggregate's member set;
    /// owned tasks are upserted.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`](crate::persistence::RepositoryError) when
    /// flattening or storage fails, or
    /// [`MappingError::ForeignRow`](crate::persistence::MappingError::ForeignRow)
    /// when a task id is already stored under another project. Nothing is
    /// written in that case.
    async fn save(&self, project: &Project) -> RepositoryResult<()>;

    /// Loads and reconstructs a project.
    ///
    /// Returns `None` when no project is stored under `id`.
    async fn find_by_id(&self, id: &ProjectId) -> RepositoryResult<Option<Project>>;

    /// Deletes a project together with its membership and task rows.
    ///
    /// Deleting an absent project succeeds.
    async fn delete(&self, id: &ProjectId) -> RepositoryResult<()>;
}
