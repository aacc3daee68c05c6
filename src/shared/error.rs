//! Error types for identifier validation.

use thiserror::Error;

/// Errors returned while constructing identifier value types.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentifierError {
    /// The raw identifier is empty after trimming.
    #[error("{kind} must not be empty")]
    Empty {
        /// Name of the identifier type that rejected the value.
        kind: &'static str,
    },
}
