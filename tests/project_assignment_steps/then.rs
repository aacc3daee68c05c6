//! Then steps for project assignment BDD scenarios.

use super::world::{ProjectAssignmentWorld, run_async};
use rstest_bdd_macros::then;
use taskboard::{
    project::{
        domain::{ProjectDomainError, ProjectEvent},
        services::ProjectServiceError,
    },
    shared::UserId,
    task::domain::Task,
};

fn stored_task(world: &ProjectAssignmentWorld) -> Result<Task, eyre::Report> {
    let project_id = world.project_id()?.as_str().to_owned();
    let task_id = world.task_id()?.clone();
    let project = run_async(world.service.find_project(&project_id))
        .map_err(|err| eyre::eyre!("reload project: {err}"))?;
    project
        .task(&task_id)
        .cloned()
        .ok_or_else(|| eyre::eyre!("task {task_id} missing from project"))
}

#[then("the project has {count:usize} member")]
fn project_member_count(world: &ProjectAssignmentWorld, count: usize) -> Result<(), eyre::Report> {
    let project_id = world.project_id()?.as_str().to_owned();
    let project = run_async(world.service.find_project(&project_id))
        .map_err(|err| eyre::eyre!("reload project: {err}"))?;
    eyre::ensure!(
        project.members().len() == count,
        "expected {count} members, found {:?}",
        project.members()
    );
    Ok(())
}

#[then("the last command recorded no events")]
fn no_events_recorded(world: &ProjectAssignmentWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.last_events.is_empty(),
        "expected no events, got {:?}",
        world.last_events
    );
    Ok(())
}

#[then("the last command recorded a task assigned event")]
fn task_assigned_recorded(world: &ProjectAssignmentWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        matches!(
            world.last_events.last(),
            Some(ProjectEvent::TaskAssigned { .. })
        ),
        "expected TaskAssigned as the last event, got {:?}",
        world.last_events
    );
    Ok(())
}

#[then("the assignment fails because the assignee is not a member")]
fn assignment_fails_not_member(world: &ProjectAssignmentWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_assignment
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing assignment result"))?;
    eyre::ensure!(
        matches!(
            result,
            Err(ProjectServiceError::Domain(
                ProjectDomainError::AssigneeNotMember { .. }
            ))
        ),
        "expected AssigneeNotMember, got {result:?}"
    );
    Ok(())
}

#[then("the task is unassigned")]
fn task_is_unassigned(world: &ProjectAssignmentWorld) -> Result<(), eyre::Report> {
    let task = stored_task(world)?;
    eyre::ensure!(
        task.assignee_id().is_none(),
        "expected no assignee, found {:?}",
        task.assignee_id()
    );
    Ok(())
}

#[then(r#"the task is assigned to "{assignee}""#)]
fn task_is_assigned_to(world: &ProjectAssignmentWorld, assignee: String) -> Result<(), eyre::Report> {
    let task = stored_task(world)?;
    eyre::ensure!(
        task.assignee_id().map(UserId::as_str) == Some(assignee.as_str()),
        "expected assignee {assignee}, found {:?}",
        task.assignee_id()
    );
    Ok(())
}
