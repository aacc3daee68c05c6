//! Taskboard: project and task tracking domain core.
//!
//! Projects have members and own tasks; tasks move through a status
//! lifecycle and may be assigned to project members; comments attach to
//! tasks.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Aggregates, entities, and value types with no
//!   infrastructure dependencies
//! - **Ports**: Abstract repository traits
//! - **Adapters**: In-memory and `PostgreSQL` implementations of the ports
//!
//! # Modules
//!
//! - [`shared`]: Identifier value types and event recording
//! - [`project`]: The project aggregate, membership, and task assignment
//! - [`task`]: The task entity, its status, and flat task access
//! - [`comment`]: The comment aggregate
//! - [`persistence`]: Row models and aggregate flattening/reconstruction

pub mod comment;
pub mod persistence;
pub mod project;
pub mod shared;
pub mod task;
