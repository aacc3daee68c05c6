//! Error types for comment validation.

use thiserror::Error;

/// Errors returned while creating or editing comments.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommentDomainError {
    /// The comment content is empty after trimming.
    #[error("comment content must not be empty")]
    EmptyContent,
}
