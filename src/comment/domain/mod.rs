//! Domain model for comments.

mod comment;
mod error;
mod events;

pub use comment::{Comment, PersistedCommentData};
pub use error::CommentDomainError;
pub use events::CommentEvent;
