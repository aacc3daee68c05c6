//! Step definitions for project assignment scenarios.

mod given;
mod then;
mod when;
pub mod world;
