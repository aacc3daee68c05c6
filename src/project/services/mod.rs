//! Application handlers for project use cases.

mod handlers;

pub use handlers::{
    CreateProjectRequest, CreateTaskRequest, ProjectService, ProjectServiceError,
    ProjectServiceResult,
};
