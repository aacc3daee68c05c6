//! Comment tests sharing a store with project data.

use eyre::WrapErr;
use rstest::rstest;
use taskboard::{
    comment::services::AddCommentRequest,
    project::services::{CreateProjectRequest, CreateTaskRequest},
    task::ports::TaskRepository,
};

use super::helpers::{Board, board};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn comments_survive_project_deletion_of_their_task(board: Board) -> eyre::Result<()> {
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
    let comment = board
        .comments
        .add_comment(AddCommentRequest::new(task_id.as_str(), "alice", "On it"))
        .await
        .wrap_err("add comment")?
        .output;

    board
        .tasks
        .delete(&task_id)
        .await
        .wrap_err("delete task row")?;

    let stored = board
        .comments
        .find_comment(comment.id().as_str())
        .await
        .wrap_err("find comment")?;
    eyre::ensure!(stored.task_id() == &task_id, "comment task reference changed");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn comment_on_unknown_task_is_accepted(board: Board) -> eyre::Result<()> {
    let outcome = board
        .comments
        .add_comment(AddCommentRequest::new("no-such-task", "alice", "Hello"))
        .await
        .wrap_err("add comment")?;

    eyre::ensure!(outcome.events.len() == 1, "expected a CommentAdded event");
    Ok(())
}
