//! Row-oriented persistence shared by every repository adapter.
//!
//! Aggregates never see rows. The [`mapping`] functions flatten an aggregate
//! into rows on save and reconstruct it from rows on load; the in-memory and
//! `PostgreSQL` adapters only move rows around.
//!
//! Task rows live in one table written by two paths: the project save path
//! (authoritative, membership rules already applied) and the flat
//! [`TaskRepository`](crate::task::ports::TaskRepository). Production writes
//! must come from project saves; the flat save bypasses the membership rule.

pub mod config;
pub mod error;
pub mod mapping;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod schema;

pub use config::PersistenceConfig;
pub use error::{MappingError, RepositoryError, RepositoryResult};
