//! In-memory flat task repository.

use async_trait::async_trait;

use crate::persistence::{
    RepositoryResult,
    mapping::{row_to_task, task_to_row},
    memory::InMemoryStore,
};
use crate::shared::TaskId;
use crate::task::{domain::Task, ports::TaskRepository};

/// Task repository over the shared [`InMemoryStore`] task table.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    store: InMemoryStore,
}

impl InMemoryTaskRepository {
    /// Creates a repository over a fresh, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository sharing an existing store.
    #[must_use]
    pub const fn from_store(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn save(&self, task: &Task) -> RepositoryResult<()> {
        self.store.write(|tables| {
            let position = tables.next_position(task.project_id().as_str());
            tables.upsert_task(task_to_row(task, position), true)?;
            Ok(())
        })
    }

    async fn find_by_id(&self, id: &TaskId) -> RepositoryResult<Option<Task>> {
        self.store.read(|tables| {
            let task = tables
                .tasks
                .get(id.as_str())
                .cloned()
                .map(row_to_task)
                .transpose()?;
            Ok(task)
        })
    }

    async fn delete(&self, id: &TaskId) -> RepositoryResult<()> {
        self.store.write(|tables| {
            tables.tasks.remove(id.as_str());
            Ok(())
        })
    }
}
