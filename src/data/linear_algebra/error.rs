//! # Errors for containers, views and indexing
//!
//! Every operation validates its arguments before touching any storage. When validation fails, one
//! of the variants below is returned and nothing has been mutated.
use thiserror::Error as ThisError;

/// Result of a fallible container operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Describes why a container, view or indexing operation was rejected.
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Two mutually exclusive constructor arguments were both supplied.
    #[error("arguments '{first}' and '{second}' cannot be given at the same time")]
    ArgumentConflict {
        /// Name of the first argument.
        first: &'static str,
        /// Name of the second argument.
        second: &'static str,
    },
    /// Malformed or inconsistent dimensions.
    ///
    /// The contained `String` is a message for the end user.
    #[error("invalid shape: {0}")]
    InvalidShape(String),
    /// A constructor or view argument is not of a recognized family, or has the wrong rank.
    #[error("argument '{argument}' should be {expected}, got {found}")]
    ArgumentType {
        /// Name of the argument.
        argument: &'static str,
        /// What would have been accepted.
        expected: &'static str,
        /// Description of what was provided.
        found: String,
    },
    /// An operation needs equal lengths or shapes, and they differ.
    #[error("size mismatch: expected {expected:?}, got {found:?}")]
    SizeMismatch {
        /// Length or shape of the destination.
        expected: Vec<usize>,
        /// Length or shape of the source.
        found: Vec<usize>,
    },
    /// A computed offset, length or extent exceeds the bounds of the source, or a range is
    /// malformed.
    #[error("index out of range: {0}")]
    IndexOutOfRange(String),
    /// Negative indices are not counted from the end; they are rejected.
    #[error("negative indices are not supported, got {0}")]
    NotSupported(isize),
    /// The shape of an index expression is not accepted here.
    #[error("invalid index type: {0}")]
    InvalidIndexType(String),
}

impl Error {
    /// Out of range error for an argument that should lie in `[0, max]`.
    pub(crate) fn bound(argument: &str, value: usize, max: usize, context: impl AsRef<str>) -> Self {
        Error::IndexOutOfRange(format!(
            "argument {}={} should be in the range [0,{}]{}",
            argument, value, max, context.as_ref(),
        ))
    }
}
