//! Identifier value types shared across the project, task, and comment
//! contexts.
//!
//! Every identifier wraps an opaque, non-empty string. Distinct types keep a
//! [`ProjectId`] from being passed where a [`TaskId`] is expected.

use super::IdentifierError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! string_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a validated identifier.
            ///
            /// The raw value is stored unchanged; only its trimmed form is
            /// checked for emptiness.
            ///
            /// # Errors
            ///
            /// Returns [`IdentifierError::Empty`] when the value is empty or
            /// consists only of whitespace.
            pub fn new(value: impl Into<String>) -> Result<Self, IdentifierError> {
                let raw = value.into();
                if raw.trim().is_empty() {
                    return Err(IdentifierError::Empty {
                        kind: stringify!($name),
                    });
                }
                Ok(Self(raw))
            }

            /// Creates a fresh random identifier.
            #[must_use]
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Returns the identifier as `str`.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the identifier, returning the wrapped string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdentifierError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = IdentifierError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl FromStr for $name {
            type Err = IdentifierError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

string_identifier!(
    /// Identifier of a project aggregate.
    ProjectId
);

string_identifier!(
    /// Identifier of a task within its owning project.
    TaskId
);

string_identifier!(
    /// Identifier of a user, used for project membership, task assignment,
    /// and comment authorship.
    UserId
);

string_identifier!(
    /// Identifier of a comment aggregate.
    CommentId
);
