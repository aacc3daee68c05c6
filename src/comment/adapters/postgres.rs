//! `PostgreSQL` comment repository.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;
use tracing::debug;

use crate::comment::{domain::Comment, ports::CommentRepository};
use crate::persistence::{
    RepositoryResult,
    mapping::{comment_to_row, row_to_comment},
    models::CommentRow,
    postgres::{PgPool, run_blocking},
    schema::comments,
};
use crate::shared::CommentId;

/// `PostgreSQL`-backed comment repository.
#[derive(Debug, Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn save(&self, comment: &Comment) -> RepositoryResult<()> {
        debug!(comment_id = %comment.id(), "saving comment");
        let row = comment_to_row(comment);
        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(comments::table)
                .values(&row)
                .on_conflict(comments::id)
                .do_update()
                .set(comments::content.eq(excluded(comments::content)))
                .execute(connection)?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: &CommentId) -> RepositoryResult<Option<Comment>> {
        let comment_id = id.as_str().to_owned();
        run_blocking(&self.pool, move |connection| {
            let row = comments::table
                .find(&comment_id)
                .select(CommentRow::as_select())
                .first::<CommentRow>(connection)
                .optional()?;
            Ok(row.map(row_to_comment).transpose()?)
        })
        .await
    }

    async fn delete(&self, id: &CommentId) -> RepositoryResult<()> {
        let comment_id = id.as_str().to_owned();
        debug!(comment_id = %id, "deleting comment");
        run_blocking(&self.pool, move |connection| {
            diesel::delete(comments::table.find(&comment_id)).execute(connection)?;
            Ok(())
        })
        .await
    }
}
