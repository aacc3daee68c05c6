//! Comment aggregate: user-authored notes attached to tasks.
//!
//! Comments reference their task and author by identifier only; nothing
//! cascades between a task and its comments.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
