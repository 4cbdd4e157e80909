//! # jsonpack
//!
//! A decoder for the jsonpack compact JSON serialization format.
//!
//! ## What is jsonpack?
//!
//! jsonpack trades JSON's self-description for payload size. Instead of
//! repeating every string and number where it occurs, a packed payload
//! carries a type-segmented **symbol table** (text, integer, float, and
//! date segments) followed by an **instruction stream** of base-36 indices
//! and single-character structural markers that rebuild the original
//! structure by reference. Identical values are stored once and referenced
//! as often as needed.
//!
//! ```text
//! packed := textSeg '^' intSeg '^' floatSeg '^' dateSeg '^' instructions
//! ```
//!
//! ## Key Features
//!
//! - **Full type coverage**: primitives, nested arrays/objects, binary
//!   blobs, error records, and millisecond-precision dates
//! - **Serde Compatible**: decoded values deserialize into existing Rust
//!   types via [`from_value`] and `#[derive(Deserialize)]`
//! - **Permissive by contract**: malformed numeric symbol text degrades to
//!   NaN in-band, matching the encoder ecosystem; strictness is opt-in via
//!   [`DecodeOptions::strict`]
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! jsonpack = "0.1"
//! ```
//!
//! ### Decoding
//!
//! ```rust
//! use jsonpack::{from_str, Value};
//!
//! // Symbol table: "a b" (escaped), "c"; instructions: object-open,
//! // key index 0, value index 1, close.
//! let value = from_str("a+b|c^^^^$|0|1]").unwrap();
//!
//! let obj = value.as_object().unwrap();
//! assert_eq!(obj.get("a b").and_then(|v| v.as_str()), Some("c"));
//! ```
//!
//! ### Typed Extraction
//!
//! ```rust
//! use jsonpack::{from_str, from_value};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: i64,
//!     name: String,
//! }
//!
//! let value = from_str("id|name|Alice^1^^^$|0|3|1|2]").unwrap();
//! let user: User = from_value(value).unwrap();
//! assert_eq!(user, User { id: 1, name: "Alice".to_string() });
//! ```
//!
//! ### Shared References
//!
//! The instruction stream can reference the same symbol any number of
//! times; every reference resolves to an equal value:
//!
//! ```rust
//! use jsonpack::{from_str, Value};
//!
//! let value = from_str("^1^^^@|0|0]").unwrap();
//! assert_eq!(value, Value::Array(vec![Value::from(1), Value::from(1)]));
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Scanning**: O(n) single pass over the input, no backtracking
//! - **Interpretation**: O(t) over the instruction stream; recursion depth
//!   equals container nesting depth
//! - **Memory**: one owned `Value` tree; symbol values are cloned per
//!   reference
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - All token and symbol indexing is bounds-checked; a truncated
//!   instruction stream is a hard error, never a read past the end
//! - Proper error propagation with `Result` types
//!
//! ## Format Specification
//!
//! See the [`format`] module for the full wire-format description.
//!
//! ## Examples
//!
//! See the `demos/` directory for focused, runnable examples:
//!
//! - **`simple.rs`** - Decoding a packed payload into typed data
//! - **`dynamic_values.rs`** - Working with `Value` dynamically
//! - **`error_records.rs`** - Consuming decoded error records
//!
//! Run any example with: `cargo run --example <name>`

pub mod de;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod record;
mod scan;
pub mod value;

pub use de::Decoder;
pub use error::{Error, Result};
pub use map::PackMap;
pub use options::DecodeOptions;
pub use record::ErrorRecord;
pub use value::{Number, Value};

use serde::de::DeserializeOwned;
use std::io;

/// Decodes a packed payload from a string of packed text.
///
/// # Examples
///
/// ```rust
/// use jsonpack::{from_str, Value};
///
/// let value = from_str("hello^^^^0").unwrap();
/// assert_eq!(value, Value::String("hello".to_string()));
/// ```
///
/// # Errors
///
/// Returns an error if the instruction stream is truncated inside an open
/// container.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Value> {
    from_str_with_options(s, DecodeOptions::default())
}

/// Decodes a packed payload from a string with custom options.
///
/// # Examples
///
/// ```rust
/// use jsonpack::{from_str_with_options, DecodeOptions};
///
/// // Index 9 points past the symbol table: strict mode surfaces it
/// let result = from_str_with_options("abc^^^^@|9]", DecodeOptions::strict());
/// assert!(result.is_err());
/// ```
///
/// # Errors
///
/// Returns an error on a truncated instruction stream, or on out-of-range
/// symbol references when `options` is strict.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(s: &str, options: DecodeOptions) -> Result<Value> {
    Decoder::with_options(options).decode_str(s)
}

/// Decodes a packed payload from bytes.
///
/// This is the primary entry point: input bytes are interpreted as UTF-8
/// text, the encoding the paired encoder emits.
///
/// # Examples
///
/// ```rust
/// use jsonpack::{from_slice, Value};
///
/// let value = from_slice(b"^1^^^@|0|0]").unwrap();
/// assert_eq!(value, Value::Array(vec![Value::from(1), Value::from(1)]));
/// ```
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or the instruction
/// stream is truncated.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Value> {
    from_slice_with_options(v, DecodeOptions::default())
}

/// Decodes a packed payload from bytes with custom options.
///
/// # Errors
///
/// Same failure modes as [`from_slice`], plus out-of-range symbol
/// references when `options` is strict.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice_with_options(v: &[u8], options: DecodeOptions) -> Result<Value> {
    Decoder::with_options(options).decode(v)
}

/// Decodes a packed payload from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use jsonpack::{from_reader, Value};
/// use std::io::Cursor;
///
/// let cursor = Cursor::new(b"hello^^^^0");
/// let value = from_reader(cursor).unwrap();
/// assert_eq!(value, Value::String("hello".to_string()));
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the bytes are not valid UTF-8, or the
/// instruction stream is truncated.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<Value>
where
    R: io::Read,
{
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_slice(&buf)
}

/// Deserializes an instance of type `T` from a decoded [`Value`].
///
/// Useful for moving from the dynamic representation to typed data once the
/// payload shape is known.
///
/// # Examples
///
/// ```rust
/// use jsonpack::{from_str, from_value};
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// let value = from_str("x|y^1|2^^^$|0|2|1|3]").unwrap();
/// let point: Point = from_value(value).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(value)
}
