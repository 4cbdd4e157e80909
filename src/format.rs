//! jsonpack Wire Format
//!
//! This module documents the packed format as consumed by this library.
//!
//! # Overview
//!
//! A packed payload is a single line of text in five `^`-separated
//! sections: four symbol-table segments followed by an instruction stream.
//!
//! ```text
//! packed := textSeg '^' intSeg '^' floatSeg '^' dateSeg '^' instructions
//! textSeg, intSeg, floatSeg, dateSeg := value ('|' value)*
//! instructions := (indexDigits | structuralChar)*
//! structuralChar := '|' | '$' | '@' | '*' | '#' | ']'
//! ```
//!
//! The design goal is payload size: every distinct scalar is stored once in
//! the symbol table, and the structure references it by index as often as
//! needed. `{"name":"a","child":{"name":"a"}}` stores `"a"` a single time.
//!
//! # Symbol table
//!
//! The four segments hold, in order: text values, base-36 integers, decimal
//! floats, and dates as base-36 Unix millisecond timestamps. Entries within
//! a segment are `|`-separated. Indices are **global**: the `i`-th value
//! across all four segments concatenated in declared order has index `i`,
//! regardless of which segment it came from.
//!
//! An empty segment contributes nothing. An empty *entry* cannot exist:
//! consecutive separators collapse, and an explicit empty string is encoded
//! as a sentinel token in the instruction stream instead.
//!
//! ## Text escaping
//!
//! Text values reserve four characters for the format itself, plus `+` as
//! the space abbreviation:
//!
//! | Literal | Encoded |
//! |---------|---------|
//! | space   | `+`     |
//! | `+`     | `%2B`   |
//! | `\|`    | `%7C`   |
//! | `^`     | `%5E`   |
//! | `%`     | `%25`   |
//!
//! Escape codes are case-sensitive; any other `%` sequence is literal.
//!
//! # Instruction stream
//!
//! The instruction stream is a flat token sequence. Runs of base-36 digits
//! form integer tokens; the structural characters delimit them:
//!
//! | Char | Meaning |
//! |------|---------|
//! | `@`  | array open |
//! | `$`  | object open |
//! | `*`  | binary blob open |
//! | `#`  | error record open |
//! | `]`  | container close (universal) |
//! | `\|` | token terminator (emits no token itself) |
//!
//! Object and error-record bodies alternate key and value tokens; keys are
//! ordinary references to text symbols. Blob bodies are element tokens
//! whose integer values are taken modulo 256.
//!
//! ## Sentinel tokens
//!
//! Five reserved negative integers denote literals directly, with no
//! symbol-table access:
//!
//! | Token | Value |
//! |-------|-------|
//! | `-1`  | `true` |
//! | `-2`  | `false` |
//! | `-3`  | `null` |
//! | `-4`  | `""` (empty string) |
//! | `-5`  | absent (`undefined`) |
//!
//! Symbol indices are non-negative by construction, so sentinels can never
//! collide with a table slot.
//!
//! # Worked example
//!
//! ```text
//! a+b|c^^^^$|0|1]
//! ```
//!
//! - text segment: `a b` (index 0), `c` (index 1); the other segments are
//!   empty
//! - instructions: object-open, key index 0, value index 1, close
//! - decodes to the object `{"a b": "c"}`
//!
//! ```rust
//! use jsonpack::from_str;
//!
//! let value = from_str("a+b|c^^^^$|0|1]").unwrap();
//! assert_eq!(
//!     value.as_object().unwrap().get("a b").and_then(|v| v.as_str()),
//!     Some("c"),
//! );
//! ```
//!
//! # Permissiveness
//!
//! The format's encoder ecosystem is permissive, and this decoder matches
//! it:
//!
//! - numeric symbol text that fails to parse becomes a NaN entry; the scan
//!   continues
//! - numeric parsing is longest-prefix (`1.5x` parses as `1.5`)
//! - a reference past the end of the symbol table resolves to the absence
//!   marker (opt into [`crate::DecodeOptions::strict`] to fail instead)
//!
//! The one structural hard error is a container whose close marker never
//! arrives: that payload is unusable and decoding fails as a whole.
