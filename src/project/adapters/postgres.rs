//! `PostgreSQL` repository for the project aggregate.

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::upsert::excluded;
use tracing::debug;

use crate::persistence::{
    PersistenceConfig, RepositoryError, RepositoryResult,
    mapping::{FlattenedProject, flatten_project, reconstruct_project},
    models::{NewProjectMemberRow, ProjectMemberRow, ProjectRow, TaskRow},
    postgres::{PgPool, ensure_tasks_owned_by, run_blocking},
    schema::{project_members, projects, tasks},
};
use crate::project::{domain::Project, ports::ProjectRepository};
use crate::shared::ProjectId;

/// `PostgreSQL`-backed project repository.
#[derive(Debug, Clone)]
pub struct PostgresProjectRepository {
    pool: PgPool,
    config: PersistenceConfig,
}

impl PostgresProjectRepository {
    /// Creates a repository with default persistence settings.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self::with_config(pool, PersistenceConfig::default())
    }

    /// Creates a repository with explicit persistence settings.
    #[must_use]
    pub const fn with_config(pool: PgPool, config: PersistenceConfig) -> Self {
        Self { pool, config }
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn save(&self, project: &Project) -> RepositoryResult<()> {
        let flattened = flatten_project(project)?;
        let access_level = self.config.default_access_level.clone();
        debug!(
            project_id = %project.id(),
            members = flattened.member_ids.len(),
            tasks = flattened.tasks.len(),
            "saving project"
        );

        run_blocking(&self.pool, move |connection| {
            connection.transaction::<_, RepositoryError, _>(|tx| {
                write_project(tx, flattened, &access_level)
            })
        })
        .await
    }

    async fn find_by_id(&self, id: &ProjectId) -> RepositoryResult<Option<Project>> {
        let project_id = id.as_str().to_owned();
        run_blocking(&self.pool, move |connection| {
            connection.transaction::<_, RepositoryError, _>(|tx| {
                let Some(root) = projects::table
                    .find(&project_id)
                    .select(ProjectRow::as_select())
                    .first(tx)
                    .optional()?
                else {
                    return Ok(None);
                };
                let members = project_members::table
                    .filter(project_members::project_id.eq(&project_id))
                    .order((
                        project_members::joined_at.asc(),
                        project_members::member_id.asc(),
                    ))
                    .select(ProjectMemberRow::as_select())
                    .load(tx)?;
                let task_rows = tasks::table
                    .filter(tasks::project_id.eq(&project_id))
                    .order((tasks::position.asc(), tasks::id.asc()))
                    .select(TaskRow::as_select())
                    .load(tx)?;
                Ok(Some(reconstruct_project(root, members, task_rows)?))
            })
        })
        .await
    }

    async fn delete(&self, id: &ProjectId) -> RepositoryResult<()> {
        let project_id = id.as_str().to_owned();
        debug!(project_id = %id, "deleting project");
        run_blocking(&self.pool, move |connection| {
            connection.transaction::<_, RepositoryError, _>(|tx| {
                diesel::delete(tasks::table.filter(tasks::project_id.eq(&project_id)))
                    .execute(tx)?;
                diesel::delete(
                    project_members::table.filter(project_members::project_id.eq(&project_id)),
                )
                .execute(tx)?;
                diesel::delete(projects::table.find(&project_id)).execute(tx)?;
                Ok(())
            })
        })
        .await
    }
}

/// Upserts the root row, syncs membership, and upserts owned tasks.
fn write_project(
    tx: &mut PgConnection,
    flattened: FlattenedProject,
    access_level: &str,
) -> RepositoryResult<()> {
    let FlattenedProject {
        project: root,
        member_ids,
        tasks: task_rows,
    } = flattened;
    let project_id = root.id.clone();
    let task_ids: Vec<String> = task_rows.iter().map(|row| row.id.clone()).collect();
    ensure_tasks_owned_by(tx, &project_id, &task_ids)?;

    diesel::insert_into(projects::table)
        .values(&root)
        .on_conflict(projects::id)
        .do_update()
        .set(projects::name.eq(excluded(projects::name)))
        .execute(tx)?;

    let member_rows: Vec<NewProjectMemberRow> = member_ids
        .iter()
        .map(|member_id| NewProjectMemberRow {
            project_id: project_id.clone(),
            member_id: member_id.clone(),
            access_level: access_level.to_owned(),
        })
        .collect();

    diesel::delete(
        project_members::table
            .filter(project_members::project_id.eq(&project_id))
            .filter(project_members::member_id.ne_all(member_ids)),
    )
    .execute(tx)?;

    if !member_rows.is_empty() {
        diesel::insert_into(project_members::table)
            .values(&member_rows)
            .on_conflict((project_members::project_id, project_members::member_id))
            .do_nothing()
            .execute(tx)?;
    }

    if !task_rows.is_empty() {
        diesel::query_dsl::methods::FilterDsl::filter(
            diesel::insert_into(tasks::table)
                .values(&task_rows)
                .on_conflict(tasks::id)
                .do_update()
                .set((
                    tasks::title.eq(excluded(tasks::title)),
                    tasks::description.eq(excluded(tasks::description)),
                    tasks::status.eq(excluded(tasks::status)),
                    tasks::assignee_id.eq(excluded(tasks::assignee_id)),
                    tasks::position.eq(excluded(tasks::position)),
                )),
            tasks::project_id.eq(excluded(tasks::project_id)),
        )
        .execute(tx)?;
    }
    Ok(())
}
