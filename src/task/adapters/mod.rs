//! Persistence adapters for flat task access.

pub mod memory;
pub mod postgres;
