//! Shared fixtures for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::{
    comment::{adapters::memory::InMemoryCommentRepository, services::CommentService},
    persistence::memory::InMemoryStore,
    project::{adapters::memory::InMemoryProjectRepository, services::ProjectService},
    task::adapters::memory::InMemoryTaskRepository,
};

/// Project service over the in-memory adapter.
pub type TestProjectService = ProjectService<InMemoryProjectRepository, DefaultClock>;

/// Comment service over the in-memory adapter.
pub type TestCommentService = CommentService<InMemoryCommentRepository, DefaultClock>;

/// Services and the flat task repository sharing one store.
pub struct Board {
    pub projects: TestProjectService,
    pub comments: TestCommentService,
    pub tasks: InMemoryTaskRepository,
}

/// Provides a board whose repositories all write to the same store.
#[fixture]
pub fn board() -> Board {
    let store = InMemoryStore::new();
    let clock = Arc::new(DefaultClock);
    Board {
        projects: ProjectService::new(
            Arc::new(InMemoryProjectRepository::from_store(store.clone())),
            Arc::clone(&clock),
        ),
        comments: CommentService::new(
            Arc::new(InMemoryCommentRepository::from_store(store.clone())),
            clock,
        ),
        tasks: InMemoryTaskRepository::from_store(store),
    }
}
