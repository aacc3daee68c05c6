//! Domain model for tasks.
//!
//! A [`Task`] is an entity owned by its project aggregate. Creation and
//! assignment are only reachable through
//! [`Project`](crate::project::domain::Project), which enforces the
//! membership rule before delegating here.

mod error;
mod status;
mod task;

pub use error::ParseTaskStatusError;
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task};
