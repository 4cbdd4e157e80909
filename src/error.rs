//! Error types for jsonpack decoding.
//!
//! This module provides structured error reporting for the failures a decode
//! can actually hit.
//!
//! ## Error Categories
//!
//! - **Structural errors**: an open container whose close marker never
//!   arrives ([`Error::UnexpectedEnd`]) — the payload is unusable and the
//!   decode fails as a whole
//! - **Strict-mode lookups**: symbol references outside the table
//!   ([`Error::IndexOutOfBounds`]), only raised under
//!   [`crate::DecodeOptions::strict`]
//! - **Input errors**: non-UTF-8 bytes, reader failures
//!
//! Scalar-level anomalies (malformed numeric symbol text) are *not* errors:
//! they degrade to NaN values in-band, matching the encoder ecosystem's
//! permissive contract.
//!
//! ## Examples
//!
//! ```rust
//! use jsonpack::{from_str, Error, Value};
//!
//! // Array opened, never closed
//! let result: Result<Value, Error> = from_str("^^^^@|0");
//! assert!(result.is_err());
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur during decoding.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error while reading input
    #[error("IO error: {0}")]
    Io(String),

    /// Input bytes are not valid UTF-8
    #[error("invalid UTF-8 in input: {0}")]
    InvalidUtf8(String),

    /// Instruction stream ended inside an open container
    #[error("unexpected end of instruction stream at token {at}: container was never closed")]
    UnexpectedEnd { at: usize },

    /// Symbol reference outside the symbol table (strict mode only)
    #[error("symbol index {index} out of bounds for table of {len} entries")]
    IndexOutOfBounds { index: i64, len: usize },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),

    /// Generic message
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an I/O error for reader failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates an invalid-UTF-8 error.
    pub fn invalid_utf8(msg: &str) -> Self {
        Error::InvalidUtf8(msg.to_string())
    }

    /// Creates an unexpected-end error at the given token position.
    pub fn unexpected_end(at: usize) -> Self {
        Error::UnexpectedEnd { at }
    }

    /// Creates an out-of-bounds symbol reference error.
    pub fn index_out_of_bounds(index: i64, len: usize) -> Self {
        Error::IndexOutOfBounds { index, len }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonpack::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
