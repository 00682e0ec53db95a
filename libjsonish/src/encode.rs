//! Encode values back to text.
//!
//! Two renderings are provided: compact (`serialize`) and indented
//! (`pretty_print`). Both emit object members in sorted key order and escape
//! strings with exactly the escapes the parser decodes. Numbers are written
//! with the fewest fraction digits that the parser folds back to the same
//! `f64`, so parsed values survive a round trip and re-encoding is stable.
//! Numbers with no such text, such as integers past 2^53, fall back to
//! `Display`.

use crate::parser::read_number;
use crate::Value;
use std::collections::HashMap;

/// Indentation unit used by [`pretty`] and [`Format::Pretty`].
pub const DEFAULT_INDENT: &str = "    ";

/// Output format for encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Single line, no whitespace between tokens.
    #[default]
    Compact,
    /// One element per line, indented with [`DEFAULT_INDENT`].
    Pretty,
}

/// Encode a value to a string in the specified format.
pub fn encode(value: &Value, format: Format) -> String {
    match format {
        Format::Compact => serialize(value),
        Format::Pretty => pretty(value),
    }
}

/// Compact encoding.
///
/// ```
/// use libjsonish::{parse, serialize};
///
/// let value = parse("[1, 2]").unwrap();
/// assert_eq!(serialize(&value), "[1,2]");
/// ```
pub fn serialize(value: &Value) -> String {
    match value {
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(serialize).collect();
            format!("[{}]", items.join(","))
        }
        Value::Object(obj) => {
            let items: Vec<String> = sorted_keys(obj)
                .into_iter()
                .map(|k| format!("{}:{}", encode_string(k), serialize(&obj[k])))
                .collect();
            format!("{{{}}}", items.join(","))
        }
        scalar => encode_scalar(scalar),
    }
}

/// Indented encoding with the default four-space unit.
pub fn pretty(value: &Value) -> String {
    pretty_print(value, DEFAULT_INDENT, 0)
}

/// Indented encoding.
///
/// Children of an array or object go on their own lines, prefixed by
/// `indent` repeated `depth + 1` times; the closing bracket sits at `depth`.
/// The first line is never indented, so the result can be spliced after a
/// key or list marker that is already at `depth`.
pub fn pretty_print(value: &Value, indent: &str, depth: usize) -> String {
    let pad = indent.repeat(depth);
    let pad1 = indent.repeat(depth + 1);

    match value {
        Value::Array(arr) => {
            if arr.is_empty() {
                "[]".to_string()
            } else {
                let items: Vec<String> = arr
                    .iter()
                    .map(|v| format!("{}{}", pad1, pretty_print(v, indent, depth + 1)))
                    .collect();
                format!("[\n{}\n{}]", items.join(",\n"), pad)
            }
        }
        Value::Object(obj) => {
            if obj.is_empty() {
                "{}".to_string()
            } else {
                let items: Vec<String> = sorted_keys(obj)
                    .into_iter()
                    .map(|k| {
                        format!(
                            "{}{}: {}",
                            pad1,
                            encode_string(k),
                            pretty_print(&obj[k], indent, depth + 1)
                        )
                    })
                    .collect();
                format!("{{\n{}\n{}}}", items.join(",\n"), pad)
            }
        }
        scalar => encode_scalar(scalar),
    }
}

fn sorted_keys(obj: &HashMap<String, Value>) -> Vec<&String> {
    let mut keys: Vec<&String> = obj.keys().collect();
    keys.sort();
    keys
}

fn encode_scalar(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Boolean(true) => "true".to_string(),
        Value::Boolean(false) => "false".to_string(),
        Value::Number(n) => encode_number(*n),
        Value::String(s) => encode_string(s),
        Value::Array(_) | Value::Object(_) => serialize(value),
    }
}

fn encode_number(n: f64) -> String {
    if !n.is_finite() {
        return "null".to_string(); // no NaN or Infinity in the grammar
    }

    // Fewest fraction digits that the parser's digit folding reads back as
    // exactly `n`.
    let magnitude = n.abs();
    let sign = if n < 0.0 { "-" } else { "" };
    for precision in 0..=MAX_FRACTION_DIGITS {
        let text = trim_fraction(format!("{:.*}", precision, magnitude));
        if read_number(&text) == Some(magnitude) {
            return format!("{}{}", sign, text);
        }
    }

    log::trace!("no parser-exact text for {:?}", n);
    format!("{}", n)
}

/// Digits past which an `f64` carries no more information.
const MAX_FRACTION_DIGITS: usize = 17;

fn trim_fraction(mut text: String) -> String {
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    text
}

fn encode_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            c => result.push(c),
        }
    }
    result.push('"');
    result
}
