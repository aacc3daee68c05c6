//! Persistence adapters for the project aggregate.
//!
//! - [`memory::InMemoryProjectRepository`]: row store for tests
//! - [`postgres::PostgresProjectRepository`]: Diesel-backed `PostgreSQL`
//!   persistence

pub mod memory;
pub mod postgres;
