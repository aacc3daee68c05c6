//! Events recorded by the comment aggregate.

use crate::shared::CommentId;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Immutable fact recorded by a [`Comment`](super::Comment).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CommentEvent {
    /// A comment was posted.
    CommentAdded {
        /// The new comment.
        comment_id: CommentId,
        /// When the comment was posted.
        occurred_at: DateTime<Utc>,
    },
}

impl CommentEvent {
    /// Returns the event name in snake case.
    #[must_use]
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::CommentAdded { .. } => "comment_added",
        }
    }

    /// Returns when the event occurred.
    #[must_use]
    pub const fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Self::CommentAdded { occurred_at, .. } => *occurred_at,
        }
    }
}
