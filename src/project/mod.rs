//! Project aggregate: membership, owned tasks, and assignment.
//!
//! The project is the only place where cross-entity rules are enforced: a
//! task may only be assigned to a current member of its project. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Application handlers in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
