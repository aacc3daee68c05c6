//! In-memory comment repository.

use async_trait::async_trait;

use crate::comment::{domain::Comment, ports::CommentRepository};
use crate::persistence::{
    RepositoryResult,
    mapping::{comment_to_row, row_to_comment},
    memory::InMemoryStore,
};
use crate::shared::CommentId;

/// Comment repository over an [`InMemoryStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryCommentRepository {
    store: InMemoryStore,
}

impl InMemoryCommentRepository {
    /// Creates a repository over a fresh, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository sharing an existing store.
    #[must_use]
    pub const fn from_store(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn save(&self, comment: &Comment) -> RepositoryResult<()> {
        let mut row = comment_to_row(comment);
        self.store.write(move |tables| {
            if let Some(existing) = tables.comments.get(&row.id) {
                row.created_at = existing.created_at;
            }
            tables.comments.insert(row.id.clone(), row);
            Ok(())
        })
    }

    async fn find_by_id(&self, id: &CommentId) -> RepositoryResult<Option<Comment>> {
        self.store.read(|tables| {
            let comment = tables
                .comments
                .get(id.as_str())
                .cloned()
                .map(row_to_comment)
                .transpose()?;
            Ok(comment)
        })
    }

    async fn delete(&self, id: &CommentId) -> RepositoryResult<()> {
        self.store.write(|tables| {
            tables.comments.remove(id.as_str());
            Ok(())
        })
    }
}
