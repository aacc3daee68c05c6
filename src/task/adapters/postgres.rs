//! `PostgreSQL` flat task repository.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;
use tracing::debug;

use crate::persistence::{
    RepositoryError, RepositoryResult,
    mapping::{row_to_task, task_to_row},
    models::TaskRow,
    postgres::{PgPool, ensure_tasks_owned_by, run_blocking},
    schema::tasks,
};
use crate::shared::TaskId;
use crate::task::{domain::Task, ports::TaskRepository};

/// `PostgreSQL`-backed flat task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn save(&self, task: &Task) -> RepositoryResult<()> {
        debug!(task_id = %task.id(), project_id = %task.project_id(), "saving task row");
        let pending_row = task_to_row(task, 0);

        run_blocking(&self.pool, move |connection| {
            connection.transaction::<_, RepositoryError, _>(|tx| {
                ensure_tasks_owned_by(
                    tx,
                    &pending_row.project_id,
                    std::slice::from_ref(&pending_row.id),
                )?;
                let stored_position = tasks::table
                    .find(&pending_row.id)
                    .select(tasks::position)
                    .first::<i64>(tx)
                    .optional()?;
                let position = match stored_position {
                    Some(position) => position,
                    None => tasks::table
                        .filter(tasks::project_id.eq(&pending_row.project_id))
                        .select(diesel::dsl::max(tasks::position))
                        .first::<Option<i64>>(tx)?
                        .map_or(0, |last| last.saturating_add(1)),
                };
                let row = TaskRow {
                    position,
                    ..pending_row
                };

                diesel::query_dsl::methods::FilterDsl::filter(
                    diesel::insert_into(tasks::table)
                        .values(&row)
                        .on_conflict(tasks::id)
                        .do_update()
                        .set((
                            tasks::title.eq(excluded(tasks::title)),
                            tasks::description.eq(excluded(tasks::description)),
                            tasks::status.eq(excluded(tasks::status)),
                            tasks::assignee_id.eq(excluded(tasks::assignee_id)),
                        )),
                    tasks::project_id.eq(excluded(tasks::project_id)),
                )
                .execute(tx)?;
                Ok(())
            })
        })
        .await
    }

    async fn find_by_id(&self, id: &TaskId) -> RepositoryResult<Option<Task>> {
        let task_id = id.as_str().to_owned();
        run_blocking(&self.pool, move |connection| {
            let row = tasks::table
                .find(&task_id)
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()?;
            Ok(row.map(row_to_task).transpose()?)
        })
        .await
    }

    async fn delete(&self, id: &TaskId) -> RepositoryResult<()> {
        let task_id = id.as_str().to_owned();
        debug!(task_id = %id, "deleting task row");
        run_blocking(&self.pool, move |connection| {
            diesel::delete(tasks::table.find(&task_id)).execute(connection)?;
            Ok(())
        })
        .await
    }
}
