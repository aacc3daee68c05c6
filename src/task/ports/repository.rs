//! Flat repository port for task rows.

use crate::persistence::RepositoryResult;
use crate::shared::TaskId;
use crate::task::domain::Task;
use async_trait::async_trait;

/// Direct task persistence, alongside the project aggregate.
///
/// Reads are safe from anywhere. [`TaskRepository::save`] writes the task row
/// without consulting project membership; production writes go through
/// [`ProjectRepository::save`](crate::project::ports::ProjectRepository::save).
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Creates or overwrites a task row.
    ///
    /// A new row is ordered after its project's existing tasks; an existing
    /// row keeps its position.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`](crate::persistence::RepositoryError) when
    /// storage fails, or
    /// [`MappingError::ForeignRow`](crate::persistence::MappingError::ForeignRow)
    /// when the row is stored under another project.
    async fn save(&self, task: &Task) -> RepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: &TaskId) -> RepositoryResult<Option<Task>>;

    /// Deletes a task row. Deleting an absent task succeeds.
    async fn delete(&self, id: &TaskId) -> RepositoryResult<()>;
}
