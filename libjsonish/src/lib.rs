//! jsonish: a small JSON value model with a permissive parser.
//!
//! jsonish reads JSON plus one convenience for hand-written files: object
//! keys may be written without quotes. It has no exponents, no negative
//! numbers and no `\u` escapes, and by default it stops reading after the
//! first complete value.
//!
//! # Pipeline
//!
//! 1. **Cursor**: decodes the source into Unicode scalar values and tracks a
//!    single lookahead position.
//!
//! 2. **Parser**: recursive descent over the cursor, one function per
//!    production, producing a [`Value`].
//!
//! 3. **Encoder**: renders a [`Value`] back to compact or indented text that
//!    the parser reads back to an equal value.

mod cursor;
mod encode;
mod error;
mod file;
mod parser;
mod value;

pub use encode::{encode, pretty, pretty_print, serialize, Format, DEFAULT_INDENT};
pub use error::{Error, ParseError, Result, DEFAULT_MAX_DEPTH};
pub use file::{parse_file, parse_file_with_options, write_file};
pub use parser::ParseOptions;
pub use value::{Value, ValueIndex};

/// Parse a jsonish document from a string.
///
/// Bare object keys are accepted and anything after the first complete
/// value is ignored.
///
/// # Example
///
/// ```
/// use libjsonish::parse;
///
/// let value = parse("{answer: 42}").unwrap();
/// assert_eq!(value.get("answer").and_then(|v| v.as_integer()), Some(42));
/// ```
pub fn parse(input: &str) -> Result<Value> {
    parse_with_options(input, &ParseOptions::default())
}

/// Parse strict JSON (within the same number and escape grammar): keys must
/// be quoted and only whitespace may follow the value.
pub fn parse_strict(input: &str) -> Result<Value> {
    parse_with_options(input, &ParseOptions::new().strict(true))
}

/// Parse a jsonish document with explicit options.
pub fn parse_with_options(input: &str, options: &ParseOptions) -> Result<Value> {
    let ctx = options.context();
    let mut cursor = cursor::Cursor::new(input, &ctx);
    parser::parse_root(&mut cursor)
}
