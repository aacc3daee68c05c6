//! Error types for task status parsing.

use thiserror::Error;

/// Error returned when a string does not name a task status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
