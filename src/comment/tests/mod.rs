//! Unit tests for the comment aggregate and its handlers.
