//! Shared kernel used by every bounded context.
//!
//! Holds the identifier value types that cross aggregate boundaries and the
//! event-recording component embedded in each aggregate.

mod error;
mod events;
mod ids;

pub use error::IdentifierError;
pub use events::{CommandOutcome, EventRecorder};
pub use ids::{CommentId, ProjectId, TaskId, UserId};

#[cfg(test)]
pub(crate) mod test_support;
