//! In-memory repository for the project aggregate.

use async_trait::async_trait;

use crate::persistence::{
    RepositoryResult,
    mapping::{flatten_project, reconstruct_project},
    memory::InMemoryStore,
    models::ProjectMemberRow,
};
use crate::project::{domain::Project, ports::ProjectRepository};
use crate::shared::ProjectId;

/// Project repository backed by an [`InMemoryStore`].
///
/// Projects are stored as rows, so every load goes through the same
/// reconstruction as the `PostgreSQL` adapter.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    store: InMemoryStore,
}

impl InMemoryProjectRepository {
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

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &InMemoryStore {
        &self.store
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn save(&self, project: &Project) -> RepositoryResult<()> {
        let flattened = flatten_project(project)?;
        let joined_at = self.store.clock().utc();
        let access_level = self.store.config().default_access_level.clone();

        self.store.write(move |tables| {
            for row in &flattened.tasks {
                tables.ensure_task_owner(row)?;
            }
            let project_id = flattened.project.id.clone();
            tables
                .projects
                .insert(project_id.clone(), flattened.project);

            tables.project_members.retain(|row| {
                row.project_id != project_id || flattened.member_ids.contains(&row.member_id)
            });
            for member_id in flattened.member_ids {
                let already_stored = tables
                    .project_members
                    .iter()
                    .any(|row| row.project_id == project_id && row.member_id == member_id);
                if !already_stored {
                    tables.project_members.push(ProjectMemberRow {
                        project_id: project_id.clone(),
                        member_id,
                        access_level: access_level.clone(),
                        joined_at,
                    });
                }
            }

            for row in flattened.tasks {
                tables.upsert_task(row, false)?;
            }
            Ok(())
        })
    }

    async fn find_by_id(&self, id: &ProjectId) -> RepositoryResult<Option<Project>> {
        self.store.read(|tables| {
            let Some(root) = tables.projects.get(id.as_str()).cloned() else {
                return Ok(None);
            };
            let project = reconstruct_project(
                root,
                tables.members_of(id.as_str()),
                tables.tasks_of(id.as_str()),
            )?;
            Ok(Some(project))
        })
    }

    async fn delete(&self, id: &ProjectId) -> RepositoryResult<()> {
        self.store.write(|tables| {
            tables.projects.remove(id.as_str());
            tables
                .project_members
                .retain(|row| row.project_id != id.as_str());
            tables.tasks.retain(|_, row| row.project_id != id.as_str());
            Ok(())
        })
    }
}
