//! Application handlers for comment use cases.

mod handlers;

pub use handlers::{AddCommentRequest, CommentService, CommentServiceError, CommentServiceResult};
