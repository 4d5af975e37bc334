use std::fmt;

use crate::Kind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The text is not a single JSON value surrounded by optional whitespace.
    #[error("Failed to parse JSON. Unexpected character sequence at position {position}: '{excerpt}'")]
    MalformedDocument {
        /// 0-based char offset where reading stopped
        position: usize,
        /// Unconsumed text from `position`, truncated
        excerpt: String,
    },

    /// A strict scalar accessor was called on a node of another kind.
    #[error("Failed to extract a {expected} value from a JSON node of kind '{actual}'")]
    TypeMismatch { expected: Kind, actual: Kind },

    /// A strict navigation accessor found nothing at the requested key.
    #[error("Failed to extract a child node at {key} from a JSON node of kind '{actual}'")]
    MissingChild { key: ChildKey, actual: Kind },
}

impl Error {
    pub(crate) fn malformed(position: usize, excerpt: impl Into<String>) -> Self {
        Self::MalformedDocument {
            position,
            excerpt: excerpt.into(),
        }
    }

    pub(crate) fn type_mismatch(expected: Kind, actual: Kind) -> Self {
        Self::TypeMismatch { expected, actual }
    }

    pub(crate) fn missing_child(key: ChildKey, actual: Kind) -> Self {
        Self::MissingChild { key, actual }
    }
}

/// What a navigation accessor looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildKey {
    /// Wide enough to hold any `usize` or signed index unchanged.
    Index(i128),
    Name(String),
}

impl fmt::Display for ChildKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildKey::Index(index) => write!(f, "index {index}"),
            ChildKey::Name(name) => write!(f, "name {name:?}"),
        }
    }
}
