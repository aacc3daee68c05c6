//! Project aggregate root.

use super::{ProjectDomainError, ProjectEvent};
use crate::shared::{EventRecorder, ProjectId, TaskId, UserId};
use crate::task::domain::{Task, TaskStatus};
use mockable::Clock;

/// Project aggregate root.
///
/// Owns a member set and a task collection, both kept in insertion order.
/// A freshly created project always has its owner as first member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    id: ProjectId,
    name: String,
    members: Vec<UserId>,
    tasks: Vec<Task>,
    events: EventRecorder<ProjectEvent>,
}

/// Parameter object for reconstructing a persisted project aggregate.
///
/// Members and tasks are taken as-is, in the order given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted project identifier.
    pub id: ProjectId,
    /// Persisted project name.
    pub name: String,
    /// Persisted member identifiers.
    pub members: Vec<UserId>,
    /// Persisted tasks owned by the project.
    pub tasks: Vec<Task>,
}

impl Project {
    /// Creates a project with `owner_id` as its first member.
    ///
    /// Records a single [`ProjectEvent::MemberAdded`] for the owner.
    #[must_use]
    pub fn create(
        id: ProjectId,
        name: impl Into<String>,
        owner_id: UserId,
        clock: &impl Clock,
    ) -> Self {
        let mut project = Self {
            id,
            name: name.into(),
            members: Vec::new(),
            tasks: Vec::new(),
            events: EventRecorder::new(),
        };
        project.add_member(owner_id, clock);
        project
    }

    /// Reconstructs a project from persisted storage.
    ///
    /// Creation rules are not re-run and no events are recorded.
    pub(crate) fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            members: data.members,
            tasks: data.tasks,
            events: EventRecorder::new(),
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> &ProjectId {
        &self.id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the members in the order they joined.
    #[must_use]
    pub fn members(&self) -> &[UserId] {
        &self.members
    }

    /// Returns the owned tasks in creation order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up an owned task.
    #[must_use]
    pub fn task(&self, task_id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == task_id)
    }

    /// Returns `true` when `user_id` is a member of the project.
    #[must_use]
    pub fn is_member(&self, user_id: &UserId) -> bool {
        self.members.contains(user_id)
    }

    /// Adds a member.
    ///
    /// Adding an existing member is a no-op that records nothing. Returns
    /// whether the member was newly added.
    pub fn add_member(&mut self, member_id: UserId, clock: &impl Clock) -> bool {
        if self.is_member(&member_id) {
            return false;
        }
        self.members.push(member_id.clone());
        self.events.record(ProjectEvent::MemberAdded {
            project_id: self.id.clone(),
            member_id,
            occurred_at: clock.utc(),
        });
        true
    }

    /// Creates a pending, unassigned task owned by this project.
    ///
    /// Callers supply a fresh identifier. Reusing an existing identifier
    /// replaces that task in place.
    pub fn create_task(
        &mut self,
        task_id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        clock: &impl Clock,
    ) {
        let task = Task::create(task_id.clone(), self.id.clone(), title, description);
        match self.tasks.iter_mut().find(|existing| existing.id() == &task_id) {
            Some(existing) => *existing = task,
            None => self.tasks.push(task),
        }
        self.events.record(ProjectEvent::TaskCreated {
            task_id,
            project_id: self.id.clone(),
            occurred_at: clock.utc(),
        });
    }

    /// Assigns an owned task to a member.
    ///
    /// Membership is checked before the task lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::AssigneeNotMember`] when `assignee_id`
    /// is not a member, or [`ProjectDomainError::TaskNotFound`] when the task
    /// is not owned by this project.
    pub fn assign_task(
        &mut self,
        task_id: &TaskId,
        assignee_id: UserId,
        clock: &impl Clock,
    ) -> Result<(), ProjectDomainError> {
        if !self.is_member(&assignee_id) {
            return Err(ProjectDomainError::AssigneeNotMember {
                project_id: self.id.clone(),
                user_id: assignee_id,
            });
        }
        let task = self.task_mut(task_id)?;
        task.assign_to(assignee_id.clone());
        self.events.record(ProjectEvent::TaskAssigned {
            project_id: self.id.clone(),
            task_id: task_id.clone(),
            assignee_id,
            occurred_at: clock.utc(),
        });
        Ok(())
    }

    /// Moves an owned task to `status`. Any status may follow any other.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::TaskNotFound`] when the task is not
    /// owned by this project.
    pub fn change_task_status(
        &mut self,
        task_id: &TaskId,
        status: TaskStatus,
    ) -> Result<(), ProjectDomainError> {
        self.task_mut(task_id)?.mark_as(status);
        Ok(())
    }

    /// Returns the recorded events and clears the buffer.
    #[must_use]
    pub fn pull_domain_events(&mut self) -> Vec<ProjectEvent> {
        self.events.drain()
    }

    /// Returns the recorded events without clearing them.
    #[must_use]
    pub fn pending_events(&self) -> &[ProjectEvent] {
        self.events.pending()
    }

    fn task_mut(&mut self, task_id: &TaskId) -> Result<&mut Task, ProjectDomainError> {
        let project_id = &self.id;
        self.tasks
            .iter_mut()
            .find(|task| task.id() == task_id)
            .ok_or_else(|| ProjectDomainError::TaskNotFound {
                project_id: project_id.clone(),
                task_id: task_id.clone(),
            })
    }
}
