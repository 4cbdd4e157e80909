//! Decoding: the instruction-stream interpreter and typed extraction.
//!
//! This module provides [`Decoder`], which turns a packed payload into a
//! [`Value`], and the `serde::Deserializer` impl on `Value` that powers
//! [`crate::from_value`].
//!
//! ## Overview
//!
//! Decoding is two sequential steps per call:
//!
//! 1. the scanner splits the input into a symbol table and an instruction
//!    stream (see `scan`)
//! 2. a recursive-descent interpreter walks the instruction stream with an
//!    explicit cursor, resolving container markers into nested values and
//!    integer tokens into sentinel literals or symbol-table lookups
//!
//! All decode state lives on the call stack: a `Decoder` holds only its
//! options, so one instance can serve any number of calls, concurrent or
//! not.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use jsonpack::{from_str, Value};
//!
//! let value = from_str("a+b|c^^^^$|0|1]").unwrap();
//! let obj = value.as_object().unwrap();
//! assert_eq!(obj.get("a b").and_then(|v| v.as_str()), Some("c"));
//! ```

use crate::options::DecodeOptions;
use crate::scan::{Scanner, Token};
use crate::value::{Number, Value};
use crate::{Error, ErrorRecord, PackMap, Result};
use log::{debug, trace};
use serde::de::value::{MapDeserializer, SeqDeserializer};
use serde::de::IntoDeserializer;
use serde::forward_to_deserialize_any;

// Reserved instruction-stream sentinels. Symbol indices are always >= 0 by
// construction, so these can never shadow a real table slot.
const TOKEN_TRUE: i64 = -1;
const TOKEN_FALSE: i64 = -2;
const TOKEN_NULL: i64 = -3;
const TOKEN_EMPTY_STRING: i64 = -4;
const TOKEN_ABSENT: i64 = -5;

/// The jsonpack decoder.
///
/// Holds decode configuration only; every call builds its symbol table,
/// instruction stream, and cursor from scratch, so a single `Decoder` is
/// safe to share and reuse.
///
/// # Examples
///
/// ```rust
/// use jsonpack::{Decoder, DecodeOptions, Value};
///
/// let decoder = Decoder::new();
/// let value = decoder.decode(b"^1^^^@|0|0]").unwrap();
/// assert_eq!(value, Value::Array(vec![Value::from(1), Value::from(1)]));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    /// Creates a decoder with permissive default options.
    #[must_use]
    pub fn new() -> Self {
        Decoder::default()
    }

    /// Creates a decoder with the given options.
    #[must_use]
    pub fn with_options(options: DecodeOptions) -> Self {
        Decoder { options }
    }

    /// Decodes a packed payload from raw bytes (UTF-8).
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not valid UTF-8, the instruction
    /// stream is truncated inside an open container, or (in strict mode) a
    /// symbol reference falls outside the table.
    pub fn decode(&self, input: &[u8]) -> Result<Value> {
        let text =
            std::str::from_utf8(input).map_err(|e| Error::invalid_utf8(&e.to_string()))?;
        self.decode_str(text)
    }

    /// Decodes a packed payload from a string slice.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Decoder::decode`], minus UTF-8 validation.
    pub fn decode_str(&self, input: &str) -> Result<Value> {
        let (symbols, tokens) = Scanner::new(input).run();
        debug!(
            "decoding instruction stream of {} tokens against {} symbols",
            tokens.len(),
            symbols.len()
        );
        if tokens.is_empty() {
            // Nothing to interpret: empty input decodes to absence.
            return Ok(Value::Absent);
        }
        let mut cursor = 0;
        self.unpack(&symbols, &tokens, &mut cursor)
        // Tokens past the completed top-level value are ignored.
    }

    /// Resolves one value at the cursor, leaving the cursor past every token
    /// consumed. Callers never re-drive it.
    fn unpack(&self, symbols: &[Value], tokens: &[Token], cursor: &mut usize) -> Result<Value> {
        let token = *tokens
            .get(*cursor)
            .ok_or(Error::UnexpectedEnd { at: *cursor })?;
        *cursor += 1;

        match token {
            Token::ArrayOpen => {
                trace!("array begin");
                let mut items = Vec::new();
                while !self.at_close(tokens, cursor)? {
                    items.push(self.unpack(symbols, tokens, cursor)?);
                }
                trace!("array end, {} items", items.len());
                Ok(Value::Array(items))
            }
            Token::ObjectOpen => {
                trace!("object begin");
                let mut map = PackMap::new();
                while !self.at_close(tokens, cursor)? {
                    let key = self.unpack(symbols, tokens, cursor)?;
                    let value = self.unpack(symbols, tokens, cursor)?;
                    map.insert(property_key(&key), value);
                }
                trace!("object end, {} entries", map.len());
                Ok(Value::Object(map))
            }
            Token::BytesOpen => {
                trace!("bytes begin");
                let mut bytes = Vec::new();
                while !self.at_close(tokens, cursor)? {
                    let element = self.unpack(symbols, tokens, cursor)?;
                    bytes.push(byte_of(&element));
                }
                trace!("bytes end, {} bytes", bytes.len());
                Ok(Value::Bytes(bytes))
            }
            Token::ErrorOpen => {
                trace!("error record begin");
                let mut fields = PackMap::new();
                while !self.at_close(tokens, cursor)? {
                    let key = self.unpack(symbols, tokens, cursor)?;
                    let value = self.unpack(symbols, tokens, cursor)?;
                    fields.insert(property_key(&key), value);
                }
                Ok(Value::Error(ErrorRecord::from_fields(fields)))
            }
            // A close marker is only ever consumed by the container loops
            // above; reaching one here means a stray token at top level,
            // which resolves like an unknown reference. Same for a token
            // that never parsed as an integer.
            Token::Close | Token::Invalid => self.missing(None, symbols.len(), *cursor - 1),
            Token::Literal(TOKEN_TRUE) => Ok(Value::Bool(true)),
            Token::Literal(TOKEN_FALSE) => Ok(Value::Bool(false)),
            Token::Literal(TOKEN_NULL) => Ok(Value::Null),
            Token::Literal(TOKEN_EMPTY_STRING) => Ok(Value::String(String::new())),
            Token::Literal(TOKEN_ABSENT) => Ok(Value::Absent),
            Token::Literal(index) => {
                if let Ok(i) = usize::try_from(index) {
                    if let Some(value) = symbols.get(i) {
                        return Ok(value.clone());
                    }
                }
                self.missing(Some(index), symbols.len(), *cursor - 1)
            }
        }
    }

    /// Checks for a close marker at the cursor, consuming it when present.
    /// Running out of tokens inside an open container is a hard failure.
    fn at_close(&self, tokens: &[Token], cursor: &mut usize) -> Result<bool> {
        match tokens.get(*cursor) {
            Some(Token::Close) => {
                *cursor += 1;
                Ok(true)
            }
            Some(_) => Ok(false),
            None => Err(Error::UnexpectedEnd { at: *cursor }),
        }
    }

    /// A reference that resolves to nothing: absence when permissive, an
    /// error when strict.
    fn missing(&self, index: Option<i64>, len: usize, at: usize) -> Result<Value> {
        if self.options.strict_indices {
            return Err(match index {
                Some(index) => Error::IndexOutOfBounds { index, len },
                None => Error::custom(format!("unresolvable instruction token at {}", at)),
            });
        }
        Ok(Value::Absent)
    }
}

/// Coerces a resolved key to its property-name form, the way a dynamic
/// receiver would stringify it.
fn property_key(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Coerces a blob element to a byte: low 8 bits of its integer value,
/// zero for anything non-numeric.
fn byte_of(element: &Value) -> u8 {
    element.as_i64().map_or(0, |i| (i & 0xFF) as u8)
}

impl<'de> IntoDeserializer<'de, Error> for Value {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self::Deserializer {
        self
    }
}

/// Deserializes typed data out of an already-decoded [`Value`], so decoded
/// payloads can flow straight into `#[derive(Deserialize)]` types via
/// [`crate::from_value`].
impl<'de> serde::Deserializer<'de> for Value {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: serde::de::Visitor<'de>,
    {
        match self {
            Value::Null | Value::Absent => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Number(Number::Integer(i)) => visitor.visit_i64(i),
            Value::Number(n) => visitor.visit_f64(n.as_f64()),
            Value::String(s) => visitor.visit_string(s),
            Value::Bytes(b) => visitor.visit_byte_buf(b),
            Value::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr.into_iter())),
            Value::Object(map) => visitor.visit_map(MapDeserializer::new(map.into_iter())),
            Value::Error(record) => {
                let message = record.message().to_string();
                let mut fields = record.into_fields();
                if !fields.contains_key("message") {
                    fields.insert("message".to_string(), Value::String(message));
                }
                visitor.visit_map(MapDeserializer::new(fields.into_iter()))
            }
            Value::Date(dt) => visitor.visit_string(dt.to_rfc3339()),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: serde::de::Visitor<'de>,
    {
        match self {
            Value::Null | Value::Absent => visitor.visit_none(),
            other => visitor.visit_some(other),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct newtype_struct seq tuple tuple_struct
        map struct enum identifier ignored_any
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(input: &str) -> Result<Value> {
        Decoder::new().decode_str(input)
    }

    #[test]
    fn test_sentinels_resolve_without_symbol_table() {
        let value = decode("^^^^@|-1|-2|-3|-4|-5]").unwrap();
        assert_eq!(
            value,
            Value::Array(vec![
                Value::Bool(true),
                Value::Bool(false),
                Value::Null,
                Value::String(String::new()),
                Value::Absent,
            ])
        );
    }

    #[test]
    fn test_out_of_bounds_is_absent_by_default() {
        let value = decode("abc^^^^@|7]").unwrap();
        assert_eq!(value, Value::Array(vec![Value::Absent]));
    }

    #[test]
    fn test_out_of_bounds_fails_in_strict_mode() {
        let decoder = Decoder::with_options(DecodeOptions::strict());
        let err = decoder.decode_str("abc^^^^@|7]").unwrap_err();
        assert!(matches!(
            err,
            Error::IndexOutOfBounds { index: 7, len: 1 }
        ));
    }

    #[test]
    fn test_negative_non_sentinel_is_absent() {
        let value = decode("^^^^@|-6]").unwrap();
        assert_eq!(value, Value::Array(vec![Value::Absent]));
    }

    #[test]
    fn test_truncated_array_fails() {
        let err = decode("abc^^^^@|0").unwrap_err();
        assert!(matches!(err, Error::UnexpectedEnd { .. }));
    }

    #[test]
    fn test_truncated_object_fails() {
        let err = decode("a|b^^^^$|0|1").unwrap_err();
        assert!(matches!(err, Error::UnexpectedEnd { .. }));
    }

    #[test]
    fn test_empty_input_is_absent() {
        assert_eq!(decode("").unwrap(), Value::Absent);
        assert_eq!(decode("^^^^").unwrap(), Value::Absent);
    }

    #[test]
    fn test_stray_close_resolves_like_unknown_reference() {
        assert_eq!(decode("^^^^]").unwrap(), Value::Absent);
    }

    #[test]
    fn test_bytes_container_coerces_elements() {
        // ints 1, 255, 256 -> bytes 1, 255, 0
        let value = decode("^1|73|74^^^*|0|1|2]").unwrap();
        assert_eq!(value, Value::Bytes(vec![1, 255, 0]));
    }

    #[test]
    fn test_non_numeric_blob_element_is_zero() {
        let value = decode("^^^^*|-3]").unwrap();
        assert_eq!(value, Value::Bytes(vec![0]));
    }

    #[test]
    fn test_error_record_captures_fields() {
        let value = decode("message|boom|code^1^^^#|0|1|2|3]").unwrap();
        let record = value.as_error().expect("expected error record");
        assert_eq!(record.message(), "boom");
        assert_eq!(record.get("code").and_then(|v| v.as_i64()), Some(1));
        assert_eq!(record.fields().len(), 2);
    }

    #[test]
    fn test_property_key_coercion() {
        assert_eq!(property_key(&Value::String("k".to_string())), "k");
        assert_eq!(property_key(&Value::Null), "null");
        assert_eq!(property_key(&Value::Bool(true)), "true");
        assert_eq!(property_key(&Value::from(7)), "7");
        assert_eq!(property_key(&Value::Absent), "undefined");
    }

    #[test]
    fn test_decoder_is_reusable() {
        let decoder = Decoder::new();
        let a = decoder.decode_str("x^^^^0").unwrap();
        let b = decoder.decode_str("y^^^^0").unwrap();
        assert_eq!(a, Value::String("x".to_string()));
        assert_eq!(b, Value::String("y".to_string()));
    }
}
