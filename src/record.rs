//! Error records decoded from the `#` container.
//!
//! The packed format can carry serialized errors: a key/value container that
//! decodes to a message plus whatever extra fields the encoder captured
//! (stack, code, cause, ...). [`ErrorRecord`] keeps those as plain data with
//! first-class accessors, so a decoded error is distinguishable from an
//! ordinary object without any downcasting.
//!
//! ## Examples
//!
//! ```rust
//! use jsonpack::{ErrorRecord, PackMap, Value};
//!
//! let mut fields = PackMap::new();
//! fields.insert("message".to_string(), Value::from("boom"));
//! fields.insert("code".to_string(), Value::from(500));
//!
//! let record = ErrorRecord::from_fields(fields);
//! assert_eq!(record.message(), "boom");
//! assert_eq!(record.get("code").and_then(|v| v.as_i64()), Some(500));
//! ```

use crate::{PackMap, Value};
use std::fmt;

/// A decoded error record: a message plus all captured fields.
///
/// `fields` holds every key/value pair the payload carried, including the
/// `message` entry itself when present.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ErrorRecord {
    message: String,
    fields: PackMap,
}

impl ErrorRecord {
    /// Creates a record from an explicit message and field map.
    #[must_use]
    pub fn new(message: impl Into<String>, fields: PackMap) -> Self {
        ErrorRecord {
            message: message.into(),
            fields,
        }
    }

    /// Creates a record from captured fields, deriving the message from the
    /// `"message"` entry.
    ///
    /// A missing or non-string message field yields its display form, or an
    /// empty message when absent entirely.
    #[must_use]
    pub fn from_fields(fields: PackMap) -> Self {
        let message = match fields.get("message") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        ErrorRecord { message, fields }
    }

    /// The error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// All captured fields, in payload order.
    #[must_use]
    pub fn fields(&self) -> &PackMap {
        &self.fields
    }

    /// Looks up a captured field by name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Consumes the record, returning the field map.
    #[must_use]
    pub fn into_fields(self) -> PackMap {
        self.fields
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
