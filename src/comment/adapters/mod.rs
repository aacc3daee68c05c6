//! Persistence adapters for the comment aggregate.

pub mod memory;
pub mod postgres;
