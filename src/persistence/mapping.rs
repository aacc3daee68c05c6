//! Mapping between aggregates and their row representation.
//!
//! Reconstruction goes through each aggregate's crate-private
//! `from_persisted` constructor, so creation rules (such as the owner being a
//! member) are not re-run and no events are recorded. Every mutation made
//! after loading is still subject to the aggregate's usual rules.

use super::{
    MappingError,
    models::{CommentRow, ProjectMemberRow, ProjectRow, TaskRow},
};
use crate::comment::domain::{Comment, PersistedCommentData};
use crate::project::domain::{PersistedProjectData, Project};
use crate::shared::{IdentifierError, UserId};
use crate::task::domain::{PersistedTaskData, Task, TaskStatus};

/// Row set produced by flattening a project aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedProject {
    /// Root row with the project's scalar fields.
    pub project: ProjectRow,
    /// Full member set; storage is synced to exactly this list.
    pub member_ids: Vec<String>,
    /// One row per owned task, positioned in creation order.
    pub tasks: Vec<TaskRow>,
}

/// Flattens a project into its root row, member id list, and task rows.
///
/// # Errors
///
/// Returns [`MappingError::PositionOverflow`] when a task's position does
/// not fit the storage column.
pub fn flatten_project(project: &Project) -> Result<FlattenedProject, MappingError> {
    let tasks = project
        .tasks()
        .iter()
        .enumerate()
        .map(|(index, task)| {
            let position =
                i64::try_from(index).map_err(|_| MappingError::PositionOverflow(index))?;
            Ok(task_to_row(task, position))
        })
        .collect::<Result<Vec<_>, MappingError>>()?;

    Ok(FlattenedProject {
        project: ProjectRow {
            id: project.id().as_str().to_owned(),
            name: project.name().to_owned(),
        },
        member_ids: project
            .members()
            .iter()
            .map(|member| member.as_str().to_owned())
            .collect(),
        tasks,
    })
}

/// Reconstructs a project from its root row and related rows.
///
/// Member and task rows are taken in the order given; adapters are
/// responsible for ordering them (members by join, tasks by position).
///
/// # Errors
///
/// Returns [`MappingError`] when an identifier is blank, a stored status is
/// not canonical, a related row belongs to another project, or a member is
/// listed twice.
pub fn reconstruct_project(
    root: ProjectRow,
    members: Vec<ProjectMemberRow>,
    tasks: Vec<TaskRow>,
) -> Result<Project, MappingError> {
    let ProjectRow { id, name } = root;

    let mut member_ids: Vec<UserId> = Vec::with_capacity(members.len());
    for row in members {
        ensure_same_root("project_members", &id, &row.project_id)?;
        let member: UserId = parse_id(row.member_id, "project_members", "member_id")?;
        if member_ids.contains(&member) {
            return Err(MappingError::DuplicateMember {
                project_id: id,
                member_id: member.into_inner(),
            });
        }
        member_ids.push(member);
    }

    let owned_tasks = tasks
        .into_iter()
        .map(|row| {
            ensure_same_root("tasks", &id, &row.project_id)?;
            row_to_task(row)
        })
        .collect::<Result<Vec<_>, MappingError>>()?;

    Ok(Project::from_persisted(PersistedProjectData {
        id: parse_id(id, "projects", "id")?,
        name,
        members: member_ids,
        tasks: owned_tasks,
    }))
}

/// Converts a task into its row at the given position.
#[must_use]
pub fn task_to_row(task: &Task, position: i64) -> TaskRow {
    TaskRow {
        id: task.id().as_str().to_owned(),
        project_id: task.project_id().as_str().to_owned(),
        title: task.title().to_owned(),
        description: task.description().to_owned(),
        status: task.status().as_str().to_owned(),
        assignee_id: task.assignee_id().map(|id| id.as_str().to_owned()),
        position,
    }
}

/// Reconstructs a task from its row.
///
/// # Errors
///
/// Returns [`MappingError::InvalidIdentifier`] for blank identifiers and
/// [`MappingError::InvalidStatus`] for a non-canonical status.
pub fn row_to_task(row: TaskRow) -> Result<Task, MappingError> {
    let TaskRow {
        id,
        project_id,
        title,
        description,
        status,
        assignee_id,
        position: _,
    } = row;

    Ok(Task::from_persisted(PersistedTaskData {
        id: parse_id(id, "tasks", "id")?,
        project_id: parse_id(project_id, "tasks", "project_id")?,
        title,
        description,
        status: TaskStatus::from_canonical(&status)?,
        assignee_id: assignee_id
            .map(|value| parse_id(value, "tasks", "assignee_id"))
            .transpose()?,
    }))
}

/// Converts a comment into its row.
#[must_use]
pub fn comment_to_row(comment: &Comment) -> CommentRow {
    CommentRow {
        id: comment.id().as_str().to_owned(),
        task_id: comment.task_id().as_str().to_owned(),
        author_id: comment.author_id().as_str().to_owned(),
        content: comment.content().to_owned(),
        created_at: comment.created_at(),
    }
}

/// Reconstructs a comment from its row.
///
/// # Errors
///
/// Returns [`MappingError::InvalidIdentifier`] for blank identifiers.
pub fn row_to_comment(row: CommentRow) -> Result<Comment, MappingError> {
    Ok(Comment::from_persisted(PersistedCommentData {
        id: parse_id(row.id, "comments", "id")?,
        task_id: parse_id(row.task_id, "comments", "task_id")?,
        author_id: parse_id(row.author_id, "comments", "author_id")?,
        content: row.content,
        created_at: row.created_at,
    }))
}

fn parse_id<T>(value: String, table: &'static str, column: &'static str) -> Result<T, MappingError>
where
    T: TryFrom<String, Error = IdentifierError>,
{
    T::try_from(value).map_err(|source| MappingError::InvalidIdentifier {
        table,
        column,
        source,
    })
}

fn ensure_same_root(table: &'static str, expected: &str, found: &str) -> Result<(), MappingError> {
    if expected == found {
        return Ok(());
    }
    Err(MappingError::ForeignRow {
        table,
        expected: expected.to_owned(),
        found: found.to_owned(),
    })
}
