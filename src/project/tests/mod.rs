//! Unit tests for the project aggregate and its handlers.
