//! Error types for container operations and BCML parsing.
//!
//! Every fallible operation in the crate returns [`Result`], with an
//! [`Error`] that carries enough context to tell a bad index from a bad
//! operand from a malformed line.
//!
//! ## Error Categories
//!
//! - **Out-of-range index**: positional accessors and mutators given an
//!   index outside the valid span
//! - **Invalid operand**: set-algebra operations given a value that is not
//!   a tuple
//! - **Parse errors**: lines without a `:` separator, empty keys, and key
//!   kinds that contradict the document's established key kind
//! - **I/O errors**: reading or writing the backing text resource
//!
//! ## Examples
//!
//! ```rust
//! use bcml::{parse_line, Error};
//!
//! let result = parse_line("no separator here");
//! assert!(matches!(result, Err(Error::MissingSeparator(_))));
//! ```

use crate::value::Kind;
use thiserror::Error;

/// All errors produced by container operations and the BCML codec.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A positional operation was given an index outside the valid span.
    #[error("index {index} out of bounds for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// A set-algebra operation was given a value that is not a tuple.
    #[error("operand is not a tuple")]
    NotATuple,

    /// A line had no `:` between key and value.
    #[error("missing ':' separator in line: {0:?}")]
    MissingSeparator(String),

    /// A line's key segment tokenized to nothing.
    #[error("empty key in line: {0:?}")]
    InvalidKey(String),

    /// A line's key kind contradicts the document's established key kind.
    #[error("key kind mismatch: expected {expected}, found {found}")]
    KeyKind { expected: Kind, found: Kind },

    /// IO error during reading or writing.
    #[error("IO error: {0}")]
    Io(String),

    /// Generic message.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an out-of-range error for the given index and length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bcml::Error;
    ///
    /// let err = Error::out_of_range(4, 2);
    /// assert!(err.to_string().contains("index 4"));
    /// ```
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Error::OutOfRange { index, len }
    }

    /// Creates an I/O error carrying the failure as text, so the error
    /// type stays clonable.
    pub fn io(err: &std::io::Error) -> Self {
        Error::Io(err.to_string())
    }

    /// Creates a key-kind mismatch error.
    pub fn key_kind(expected: Kind, found: Kind) -> Self {
        Error::KeyKind { expected, found }
    }

    /// Creates a generic error with a display message.
    pub fn message<T: std::fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
