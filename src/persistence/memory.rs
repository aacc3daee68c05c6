//! In-memory row store shared by the in-memory repositories.
//!
//! Holds the same rows the `PostgreSQL` schema does so that project saves and
//! flat task lookups observe one task table. Suitable for tests and local
//! tooling only.

use super::{
    MappingError, PersistenceConfig, RepositoryError, RepositoryResult,
    models::{CommentRow, ProjectMemberRow, ProjectRow, TaskRow},
};
use mockable::{Clock, DefaultClock};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

/// Thread-safe store of persisted rows.
///
/// Cloning the store shares the underlying tables, so repositories built
/// from clones of one store see each other's writes.
#[derive(Clone)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
    clock: Arc<dyn Clock + Send + Sync>,
    config: PersistenceConfig,
}

#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub(crate) projects: HashMap<String, ProjectRow>,
    pub(crate) project_members: Vec<ProjectMemberRow>,
    pub(crate) tasks: HashMap<String, TaskRow>,
    pub(crate) comments: HashMap<String, CommentRow>,
}

impl Tables {
    /// Returns the member rows of a project in join order.
    pub(crate) fn members_of(&self, project_id: &str) -> Vec<ProjectMemberRow> {
        self.project_members
            .iter()
            .filter(|row| row.project_id == project_id)
            .cloned()
            .collect()
    }

    /// Returns the task rows of a project ordered by position.
    pub(crate) fn tasks_of(&self, project_id: &str) -> Vec<TaskRow> {
        let mut rows: Vec<TaskRow> = self
            .tasks
            .values()
            .filter(|row| row.project_id == project_id)
            .cloned()
            .collect();
        rows.sort_by(|left, right| {
            left.position
                .cmp(&right.position)
                .then_with(|| left.id.cmp(&right.id))
        });
        rows
    }

    /// Returns the position after the last task of a project.
    pub(crate) fn next_position(&self, project_id: &str) -> i64 {
        self.tasks
            .values()
            .filter(|row| row.project_id == project_id)
            .map(|row| row.position.saturating_add(1))
            .max()
            .unwrap_or(0)
    }

    /// Fails when a stored row with the same id belongs to another project.
    pub(crate) fn ensure_task_owner(&self, row: &TaskRow) -> Result<(), MappingError> {
        let Some(existing) = self.tasks.get(&row.id) else {
            return Ok(());
        };
        if existing.project_id == row.project_id {
            return Ok(());
        }
        Err(MappingError::ForeignRow {
            table: "tasks",
            expected: row.project_id.clone(),
            found: existing.project_id.clone(),
        })
    }

    /// Inserts or replaces a task row.
    ///
    /// A replaced row keeps its stored position unless `keep_position` is
    /// `false`. A row owned by another project is never replaced.
    pub(crate) fn upsert_task(
        &mut self,
        mut row: TaskRow,
        keep_position: bool,
    ) -> Result<(), MappingError> {
        self.ensure_task_owner(&row)?;
        if keep_position && let Some(existing) = self.tasks.get(&row.id) {
            row.position = existing.position;
        }
        self.tasks.insert(row.id.clone(), row);
        Ok(())
    }
}

impl InMemoryStore {
    /// Creates an empty store using the system clock and default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock), PersistenceConfig::default())
    }

    /// Creates an empty store with an explicit clock and configuration.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock + Send + Sync>, config: PersistenceConfig) -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::default())),
            clock,
            config,
        }
    }

    /// Returns the store configuration.
    #[must_use]
    pub const fn config(&self) -> &PersistenceConfig {
        &self.config
    }

    pub(crate) fn clock(&self) -> &(dyn Clock + Send + Sync) {
        self.clock.as_ref()
    }

    pub(crate) fn read<T>(
        &self,
        f: impl FnOnce(&Tables) -> RepositoryResult<T>,
    ) -> RepositoryResult<T> {
        let guard = self
            .tables
            .read()
            .map_err(|err| RepositoryError::connection(format!("lock poisoned: {err}")))?;
        f(&guard)
    }

    pub(crate) fn write<T>(
        &self,
        f: impl FnOnce(&mut Tables) -> RepositoryResult<T>,
    ) -> RepositoryResult<T> {
        let mut guard = self
            .tables
            .write()
            .map_err(|err| RepositoryError::connection(format!("lock poisoned: {err}")))?;
        f(&mut guard)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InMemoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryStore")
            .field("tables", &self.tables)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
