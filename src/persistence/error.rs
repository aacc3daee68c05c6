//! Error types for row mapping and repository operations.

use crate::shared::IdentifierError;
use crate::task::domain::ParseTaskStatusError;
use std::sync::Arc;
use thiserror::Error;

/// Stored rows cannot be turned into a valid in-memory shape, or an
/// aggregate cannot be flattened into rows.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MappingError {
    /// A stored identifier column is blank.
    #[error("invalid identifier in {table}.{column}: {source}")]
    InvalidIdentifier {
        /// Table holding the row.
        table: &'static str,
        /// Column holding the identifier.
        column: &'static str,
        /// Validation failure.
        source: IdentifierError,
    },

    /// A stored task status is not a canonical status value.
    #[error("invalid stored task status: {0}")]
    InvalidStatus(#[from] ParseTaskStatusError),

    /// A related row references a different root than the one being loaded.
    #[error("{table} row references {found}, expected {expected}")]
    ForeignRow {
        /// Table holding the row.
        table: &'static str,
        /// Root identifier being reconstructed.
        expected: String,
        /// Root identifier found in the row.
        found: String,
    },

    /// A member appears more than once in a project's membership rows.
    #[error("duplicate member {member_id} in project {project_id}")]
    DuplicateMember {
        /// Project being reconstructed.
        project_id: String,
        /// Repeated member identifier.
        member_id: String,
    },

    /// A task position does not fit the storage column.
    #[error("task position {0} exceeds storage range")]
    PositionOverflow(usize),
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors returned by repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// Stored data could not be mapped.
    #[error(transparent)]
    Mapping(#[from] MappingError),

    /// A connection or lock could not be obtained.
    #[error("connection error: {0}")]
    Connection(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Creates a connection error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }
}
