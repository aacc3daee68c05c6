//! Port contracts for flat task access.
//!
//! Ports define infrastructure-agnostic interfaces used outside the project
//! aggregate.

pub mod repository;

pub use repository::TaskRepository;
