//! Project lifecycle tests across the project and flat task repositories.

use eyre::WrapErr;
use rstest::rstest;
use taskboard::{
    project::{
        domain::{ProjectDomainError, ProjectEvent},
        services::{CreateProjectRequest, CreateTaskRequest, ProjectServiceError},
    },
    shared::UserId,
    task::{domain::TaskStatus, ports::TaskRepository},
};

use super::helpers::{Board, board};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assignment_flow_is_visible_through_flat_lookup(board: Board) -> eyre::Result<()> {
    let created = board
        .projects
        .create_project(CreateProjectRequest::new("Launch", "alice"))
        .await
        .wrap_err("create project")?;
    let project_id = created.output.id().clone();
    eyre::ensure!(
        matches!(created.events.as_slice(), [ProjectEvent::MemberAdded { .. }]),
        "expected a single MemberAdded event, got {:?}",
        created.events
    );

    board
        .projects
        .add_member(project_id.as_str(), "bob")
        .await
        .wrap_err("add member")?;
    let task_id = board
        .projects
        .create_task(CreateTaskRequest::new(project_id.as_str(), "Ship it"))
        .await
        .wrap_err("create task")?
        .output;
    board
        .projects
        .assign_task(project_id.as_str(), task_id.as_str(), "bob")
        .await
        .wrap_err("assign task")?;
    board
        .projects
        .change_task_status(project_id.as_str(), task_id.as_str(), "InProgress")
        .await
        .wrap_err("change status")?;

    let task = board
        .tasks
        .find_by_id(&task_id)
        .await
        .wrap_err("flat lookup")?
        .ok_or_else(|| eyre::eyre!("task row missing"))?;
    eyre::ensure!(task.project_id() == &project_id, "task project mismatch");
    eyre::ensure!(
        task.assignee_id().map(UserId::as_str) == Some("bob"),
        "assignee not persisted"
    );
    eyre::ensure!(task.status() == TaskStatus::InProgress, "status not persisted");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_assignment_leaves_stored_task_unassigned(board: Board) -> eyre::Result<()> {
    let project = board
        .projects
        .create_project(CreateProjectRequest::new("Launch", "alice"))
        .await
        .wrap_err("create project")?
        .output;
    let task_id = board
        .projects
        .create_task(CreateTaskRequest::new(project.id().as_str(), "Ship it"))
        .await
        .wrap_err("create task")?
        .output;

    let result = board
        .projects
        .assign_task(project.id().as_str(), task_id.as_str(), "mallory")
        .await;

    eyre::ensure!(
        matches!(
            result,
            Err(ProjectServiceError::Domain(
                ProjectDomainError::AssigneeNotMember { .. }
            ))
        ),
        "expected AssigneeNotMember, got {result:?}"
    );
    let stored = board
        .tasks
        .find_by_id(&task_id)
        .await
        .wrap_err("flat lookup")?
        .ok_or_else(|| eyre::eyre!("task row missing"))?;
    eyre::ensure!(stored.assignee_id().is_none(), "task should stay unassigned");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_reload_in_creation_order(board: Board) -> eyre::Result<()> {
    let project = board
        .projects
        .create_project(CreateProjectRequest::new("Launch", "alice"))
        .await
        .wrap_err("create project")?
        .output;
    let mut created = Vec::new();
    for title in ["first", "second", "third"] {
        let task_id = board
            .projects
            .create_task(CreateTaskRequest::new(project.id().as_str(), title))
            .await
            .wrap_err("create task")?
            .output;
        created.push(task_id);
    }

    let reloaded = board
        .projects
        .find_project(project.id().as_str())
        .await
        .wrap_err("reload project")?;
    let reloaded_ids: Vec<_> = reloaded.tasks().iter().map(|task| task.id().clone()).collect();
    eyre::ensure!(reloaded_ids == created, "task order changed on reload");
    eyre::ensure!(
        reloaded.pending_events().is_empty(),
        "reloaded project must not carry events"
    );
    Ok(())
}
