//! `PostgreSQL` connection helpers shared by the Diesel adapters.
//!
//! Diesel is synchronous, so every query runs on Tokio's blocking pool.

use super::{MappingError, PersistenceConfig, RepositoryError, RepositoryResult, schema::tasks};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::Error as DieselError;

/// `PostgreSQL` connection pool type used by every adapter.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Builds a connection pool for `database_url`.
///
/// # Errors
///
/// Returns [`RepositoryError::Connection`] when the pool cannot be built.
pub fn build_pool(database_url: &str, config: &PersistenceConfig) -> RepositoryResult<PgPool> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .max_size(config.max_pool_size)
        .build(manager)
        .map_err(|err| RepositoryError::connection(err.to_string()))
}

/// Runs a blocking Diesel operation with a pooled connection.
pub(crate) async fn run_blocking<F, T>(pool: &PgPool, f: F) -> RepositoryResult<T>
where
    F: FnOnce(&mut PgConnection) -> RepositoryResult<T> + Send + 'static,
    T: Send + 'static,
{
    let shared_pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = shared_pool
            .get()
            .map_err(|err| RepositoryError::connection(err.to_string()))?;
        f(&mut connection)
    })
    .await
    .map_err(|err| RepositoryError::connection(format!("task join error: {err}")))?
}

/// Fails when any of `task_ids` is stored under a project other than
/// `project_id`.
pub(crate) fn ensure_tasks_owned_by(
    connection: &mut PgConnection,
    project_id: &str,
    task_ids: &[String],
) -> RepositoryResult<()> {
    let foreign_owner = tasks::table
        .filter(tasks::id.eq_any(task_ids))
        .filter(tasks::project_id.ne(project_id))
        .select(tasks::project_id)
        .first::<String>(connection)
        .optional()?;
    foreign_owner.map_or(Ok(()), |found| {
        Err(MappingError::ForeignRow {
            table: "tasks",
            expected: project_id.to_owned(),
            found,
        }
        .into())
    })
}

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        Self::persistence(err)
    }
}
