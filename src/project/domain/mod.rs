//! Domain model for the project aggregate.

mod error;
mod events;
mod project;

pub use error::ProjectDomainError;
pub use events::ProjectEvent;
pub use project::{PersistedProjectData, Project};
