//! Shared world state for project assignment BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::{
    project::{
        adapters::memory::InMemoryProjectRepository,
        domain::ProjectEvent,
        services::{ProjectService, ProjectServiceResult},
    },
    shared::{CommandOutcome, ProjectId, TaskId},
};

/// Service type used by the BDD world.
pub type TestProjectService = ProjectService<InMemoryProjectRepository, DefaultClock>;

/// Scenario world for project assignment behaviour tests.
pub struct ProjectAssignmentWorld {
    pub service: TestProjectService,
    pub project_id: Option<ProjectId>,
    pub task_id: Option<TaskId>,
    pub last_events: Vec<ProjectEvent>,
    pub last_assignment: Option<ProjectServiceResult<CommandOutcome<(), ProjectEvent>>>,
}

impl ProjectAssignmentWorld {
    /// Creates a world with empty scenario state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: ProjectService::new(
                Arc::new(InMemoryProjectRepository::new()),
                Arc::new(DefaultClock),
            ),
            project_id: None,
            task_id: None,
            last_events: Vec::new(),
            last_assignment: None,
        }
    }

    /// Returns the scenario project identifier.
    pub fn project_id(&self) -> Result<&ProjectId, eyre::Report> {
        self.project_id
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing project in scenario world"))
    }

    /// Returns the scenario task identifier.
    pub fn task_id(&self) -> Result<&TaskId, eyre::Report> {
        self.task_id
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

impl Default for ProjectAssignmentWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ProjectAssignmentWorld {
    ProjectAssignmentWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
