//! Load, act, save handlers for the project aggregate.

use crate::persistence::RepositoryError;
use crate::project::{
    domain::{Project, ProjectDomainError, ProjectEvent},
    ports::ProjectRepository,
};
use crate::shared::{CommandOutcome, IdentifierError, ProjectId, TaskId, UserId};
use crate::task::domain::{ParseTaskStatusError, TaskStatus};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    name: String,
    owner_id: String,
}

impl CreateProjectRequest {
    /// Creates a request for a project named `name` owned by `owner_id`.
    #[must_use]
    pub fn new(name: impl Into<String>, owner_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner_id: owner_id.into(),
        }
    }
}

/// Request payload for creating a task inside a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    project_id: String,
    title: String,
    description: String,
}

impl CreateTaskRequest {
    /// Creates a request for a task with an empty description.
    #[must_use]
    pub fn new(project_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            title: title.into(),
            description: String::new(),
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Service-level errors for project use cases.
#[derive(Debug, Error)]
pub enum ProjectServiceError {
    /// An identifier in the request was blank.
    #[error(transparent)]
    Identifier(#[from] IdentifierError),
    /// The requested status is not recognised.
    #[error(transparent)]
    Status(#[from] ParseTaskStatusError),
    /// A project business rule was violated.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),
    /// No project is stored under the identifier.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result type for project service operations.
pub type ProjectServiceResult<T> = Result<T, ProjectServiceError>;

/// Project use-case orchestration.
///
/// Each command loads the aggregate, invokes one behaviour, saves it, and
/// drains the recorded events into the returned [`CommandOutcome`]. Events
/// are logged, not dispatched.
#[derive(Clone)]
pub struct ProjectService<R, C>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> ProjectService<R, C>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new project service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and stores a project with a freshly generated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError`] when the owner identifier is blank or
    /// the repository rejects persistence.
    pub async fn create_project(
        &self,
        request: CreateProjectRequest,
    ) -> ProjectServiceResult<CommandOutcome<Project, ProjectEvent>> {
        let owner_id = UserId::new(request.owner_id)?;
        let mut project = Project::create(
            ProjectId::generate(),
            request.name,
            owner_id,
            &*self.clock,
        );
        let events = self.commit(&mut project).await?;
        info!(project_id = %project.id(), "project created");
        Ok(CommandOutcome::new(project, events))
    }

    /// Adds a member to a stored project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::ProjectNotFound`] for an unknown
    /// project, or another [`ProjectServiceError`] on invalid input or
    /// repository failure.
    pub async fn add_member(
        &self,
        project_id: &str,
        member_id: &str,
    ) -> ProjectServiceResult<CommandOutcome<Project, ProjectEvent>> {
        let member = UserId::new(member_id)?;
        let mut project = self.load(project_id).await?;
        if project.add_member(member.clone(), &*self.clock) {
            info!(project_id = %project.id(), member_id = %member, "member added");
        }
        let events = self.commit(&mut project).await?;
        Ok(CommandOutcome::new(project, events))
    }

    /// Creates a task with a freshly generated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::ProjectNotFound`] for an unknown
    /// project, or another [`ProjectServiceError`] on invalid input or
    /// repository failure.
    pub async fn create_task(
        &self,
        request: CreateTaskRequest,
    ) -> ProjectServiceResult<CommandOutcome<TaskId, ProjectEvent>> {
        let mut project = self.load(&request.project_id).await?;
        let task_id = TaskId::generate();
        project.create_task(
            task_id.clone(),
            request.title,
            request.description,
            &*self.clock,
        );
        let events = self.commit(&mut project).await?;
        info!(project_id = %project.id(), task_id = %task_id, "task created");
        Ok(CommandOutcome::new(task_id, events))
    }

    /// Assigns a project task to a member.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Domain`] when the assignee is not a
    /// member or the task is not in the project, and
    /// [`ProjectServiceError::ProjectNotFound`] for an unknown project.
    pub async fn assign_task(
        &self,
        project_id: &str,
        task_id: &str,
        assignee_id: &str,
    ) -> ProjectServiceResult<CommandOutcome<(), ProjectEvent>> {
        let task = TaskId::new(task_id)?;
        let assignee = UserId::new(assignee_id)?;
        let mut project = self.load(project_id).await?;
        project.assign_task(&task, assignee, &*self.clock)?;
        let events = self.commit(&mut project).await?;
        info!(project_id = %project.id(), task_id = %task, "task assigned");
        Ok(CommandOutcome::new((), events))
    }

    /// Moves a project task to the status named by `status`.
    ///
    /// Status text is matched leniently (see [`TaskStatus`]'s `TryFrom`).
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Status`] for unrecognised status text,
    /// [`ProjectServiceError::Domain`] for an unknown task, and
    /// [`ProjectServiceError::ProjectNotFound`] for an unknown project.
    pub async fn change_task_status(
        &self,
        project_id: &str,
        task_id: &str,
        status: &str,
    ) -> ProjectServiceResult<TaskStatus> {
        let task = TaskId::new(task_id)?;
        let new_status = TaskStatus::try_from(status)?;
        let mut project = self.load(project_id).await?;
        project.change_task_status(&task, new_status)?;
        self.commit(&mut project).await?;
        info!(project_id = %project.id(), task_id = %task, status = %new_status, "task status changed");
        Ok(new_status)
    }

    /// Loads a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::ProjectNotFound`] when the project does
    /// not exist.
    pub async fn find_project(&self, project_id: &str) -> ProjectServiceResult<Project> {
        self.load(project_id).await
    }

    async fn load(&self, project_id: &str) -> ProjectServiceResult<Project> {
        let id = ProjectId::new(project_id)?;
        let stored = self.repository.find_by_id(&id).await?;
        stored.ok_or(ProjectServiceError::ProjectNotFound(id))
    }

    async fn commit(&self, project: &mut Project) -> ProjectServiceResult<Vec<ProjectEvent>> {
        self.repository.save(project).await?;
        let events = project.pull_domain_events();
        for event in &events {
            debug!(
                event_type = event.event_type(),
                project_id = %event.project_id(),
                occurred_at = %event.occurred_at(),
                "project event recorded"
            );
        }
        Ok(events)
    }
}
