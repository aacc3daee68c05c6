//! Row models for project, task, and comment persistence.
//!
//! The same structs back both the Diesel adapters and the in-memory store.

use super::schema::{comments, project_members, projects, tasks};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Project root row.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Insertable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    /// Project identifier.
    pub id: String,
    /// Project name.
    pub name: String,
}

/// Project membership row.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Insertable)]
#[diesel(table_name = project_members)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectMemberRow {
    /// Owning project identifier.
    pub project_id: String,
    /// Member user identifier.
    pub member_id: String,
    /// Opaque access-level tag.
    pub access_level: String,
    /// When the membership row was written.
    pub joined_at: DateTime<Utc>,
}

/// Insert model for membership rows; `joined_at` is left to the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = project_members)]
pub struct NewProjectMemberRow {
    /// Owning project identifier.
    pub project_id: String,
    /// Member user identifier.
    pub member_id: String,
    /// Opaque access-level tag.
    pub access_level: String,
}

/// Task row.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Insertable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: String,
    /// Owning project identifier.
    pub project_id: String,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Canonical status string.
    pub status: String,
    /// Optional assignee.
    pub assignee_id: Option<String>,
    /// Creation order within the owning project.
    pub position: i64,
}

/// Comment row.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Insertable)]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CommentRow {
    /// Comment identifier.
    pub id: String,
    /// Commented task identifier.
    pub task_id: String,
    /// Author user identifier.
    pub author_id: String,
    /// Comment body.
    pub content: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
