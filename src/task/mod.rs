//! Task entity, status lifecycle, and flat task access.
//!
//! Tasks are created and assigned only through the
//! [`project`](crate::project) aggregate. This module provides the entity
//! itself plus a flat repository for direct lookups:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
