//! Configuration options for decoding.
//!
//! This module provides [`DecodeOptions`], which controls how the decoder
//! treats defects the permissive default swallows:
//!
//! - **Permissive (default)**: a symbol reference outside the table resolves
//!   to [`crate::Value::Absent`], matching the behavior of the encoder
//!   ecosystem this format comes from
//! - **Strict**: the same reference fails the decode with
//!   [`crate::Error::IndexOutOfBounds`], surfacing upstream encoding defects
//!   instead of propagating absence markers through the result
//!
//! ## Examples
//!
//! ```rust
//! use jsonpack::{from_str_with_options, DecodeOptions, Value};
//!
//! // Index 5 points past the single-entry symbol table
//! let packed = "abc^^^^@|5]";
//!
//! let lenient = from_str_with_options(packed, DecodeOptions::new()).unwrap();
//! assert_eq!(lenient, Value::Array(vec![Value::Absent]));
//!
//! let strict = from_str_with_options(packed, DecodeOptions::strict());
//! assert!(strict.is_err());
//! ```

/// Configuration options for decoding.
///
/// # Examples
///
/// ```rust
/// use jsonpack::DecodeOptions;
///
/// // Default permissive options
/// let options = DecodeOptions::new();
///
/// // Fail on out-of-range symbol references
/// let options = DecodeOptions::strict();
///
/// // Equivalent builder form
/// let options = DecodeOptions::new().with_strict_indices(true);
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct DecodeOptions {
    pub(crate) strict_indices: bool,
}

impl DecodeOptions {
    /// Creates permissive default options.
    #[must_use]
    pub fn new() -> Self {
        DecodeOptions::default()
    }

    /// Creates options that fail on out-of-range symbol references.
    #[must_use]
    pub fn strict() -> Self {
        DecodeOptions {
            strict_indices: true,
        }
    }

    /// Sets whether out-of-range symbol references fail the decode.
    #[must_use]
    pub fn with_strict_indices(mut self, strict: bool) -> Self {
        self.strict_indices = strict;
        self
    }

    /// Returns `true` if out-of-range symbol references fail the decode.
    #[must_use]
    pub const fn strict_indices(&self) -> bool {
        self.strict_indices
    }
}
