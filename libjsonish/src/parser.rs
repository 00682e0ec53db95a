//! Recursive-descent value parser
//!
//! Each production takes the shared [`Cursor`] and either consumes exactly
//! the scalars it matched or fails the whole parse. There is no
//! backtracking: a production chosen by the lookahead scalar must succeed.
//!
//! - `value`: dispatch on the first non-whitespace scalar
//! - `constant`: `null`, `true`, `false`, not followed by a letter or digit
//! - `number`: unsigned digits with an optional fraction, no exponent
//! - `string`: double quoted, escapes `\n` `\t` `\\` `\"`, anything else
//!   after a backslash stands for itself
//! - `array`, `object`: comma separated, no trailing comma; object keys may
//!   be bare words unless the parse is strict

use crate::cursor::{is_space, Cursor};
use crate::error::{ParseContext, ParseError, Result};
use crate::value::Value;
use std::collections::HashMap;

/// Options for [`parse_with_options`](crate::parse_with_options).
///
/// The default is the permissive grammar: bare object keys are accepted and
/// anything after the first complete value is ignored.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Reject bare keys and require the whole input to be consumed.
    pub strict: bool,
    /// File name reported in error locations.
    pub filename: Option<String>,
    /// Deepest allowed nesting of arrays and objects.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            strict: false,
            filename: None,
            max_depth: crate::error::DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    /// Permissive options, same as `default()`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch between the strict and permissive grammars.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Name the source in error locations.
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Limit how deeply arrays and objects may nest.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub(crate) fn context(&self) -> ParseContext {
        let mut ctx = ParseContext::new(self.filename.as_deref(), self.strict);
        ctx.max_depth = self.max_depth;
        ctx
    }
}

/// Parse one top-level value.
///
/// In permissive mode whatever follows the value is left unread. Strict
/// mode allows only trailing whitespace.
pub fn parse_root(cursor: &mut Cursor) -> Result<Value> {
    let value = parse_value(cursor, 0)?;

    if cursor.ctx().strict {
        cursor.skip_whitespace();
        if !cursor.at_end() {
            return Err(cursor.error(ParseError::ExtraContent(String::new())));
        }
    }

    Ok(value)
}

fn parse_value(cursor: &mut Cursor, depth: usize) -> Result<Value> {
    cursor.skip_whitespace();

    match cursor.peek() {
        Some(c) if c.is_ascii_digit() || c == '.' => parse_number(cursor),
        Some('n' | 'f' | 't') => parse_constant(cursor),
        Some('"') => parse_string(cursor).map(Value::String),
        Some('[') => parse_array(cursor, depth + 1),
        Some('{') => parse_object(cursor, depth + 1),
        _ => Err(cursor.unexpected()),
    }
}

fn parse_constant(cursor: &mut Cursor) -> Result<Value> {
    let (word, value) = match cursor.peek() {
        Some('n') => ("null", Value::Null),
        Some('t') => ("true", Value::Boolean(true)),
        Some('f') => ("false", Value::Boolean(false)),
        _ => return Err(cursor.unexpected()),
    };

    if !cursor.looking_at(word) {
        return Err(cursor.error(ParseError::InvalidConstant(String::new())));
    }
    cursor.advance(word.len());

    // `nullable` is not `null` followed by garbage.
    if cursor.peek().is_some_and(char::is_alphanumeric) {
        return Err(cursor.error(ParseError::InvalidConstant(String::new())));
    }

    Ok(value)
}

/// Digits are folded in one at a time rather than handed to a float parser,
/// so long fractions carry the rounding error of repeated `0.1` scaling.
fn parse_number(cursor: &mut Cursor) -> Result<Value> {
    let mut number = NumberBuilder::default();

    while let Some(digit) = cursor.peek().and_then(|c| c.to_digit(10)) {
        number.push_digit(digit);
        cursor.bump();
    }

    if cursor.eat('.') {
        number.start_fraction();
        while let Some(digit) = cursor.peek().and_then(|c| c.to_digit(10)) {
            number.push_digit(digit);
            cursor.bump();
        }
    }

    if cursor.peek().is_some_and(char::is_alphanumeric) {
        return Err(cursor.error(ParseError::InvalidNumber(String::new())));
    }

    Ok(Value::Number(number.value()))
}

/// Running value of a number literal, one digit at a time.
#[derive(Debug, Default)]
struct NumberBuilder {
    value: f64,
    /// Place value of the last fraction digit, once past the point.
    scale: Option<f64>,
}

impl NumberBuilder {
    fn push_digit(&mut self, digit: u32) {
        match self.scale.as_mut() {
            None => self.value = self.value * 10.0 + f64::from(digit),
            Some(scale) => {
                *scale *= 0.1;
                self.value += *scale * f64::from(digit);
            }
        }
    }

    fn start_fraction(&mut self) {
        self.scale = Some(1.0);
    }

    fn value(&self) -> f64 {
        self.value
    }
}

/// Read a bare number literal (digits with an optional fraction) exactly as
/// the parser would, or `None` if `text` is not one.
pub(crate) fn read_number(text: &str) -> Option<f64> {
    let mut number = NumberBuilder::default();
    for c in text.chars() {
        match c {
            '.' if number.scale.is_none() => number.start_fraction(),
            c => number.push_digit(c.to_digit(10)?),
        }
    }
    Some(number.value())
}

fn parse_string(cursor: &mut Cursor) -> Result<String> {
    let start = cursor.index();
    if !cursor.eat('"') {
        return Err(cursor.unexpected());
    }

    let mut result = String::new();
    loop {
        match cursor.bump() {
            None => {
                return Err(cursor.error_at(start, ParseError::UnterminatedString(String::new())))
            }
            Some('"') => return Ok(result),
            Some('\\') => match cursor.bump() {
                None => {
                    return Err(
                        cursor.error_at(start, ParseError::UnterminatedString(String::new()))
                    )
                }
                Some('n') => result.push('\n'),
                Some('t') => result.push('\t'),
                // `\\`, `\"` and every unrecognized escape keep the scalar.
                Some(c) => result.push(c),
            },
            Some(c) => result.push(c),
        }
    }
}

fn is_bare_key_char(c: char) -> bool {
    !is_space(c) && !matches!(c, ':' | ',' | '{' | '}' | '[' | ']' | '"')
}

/// Member name: a quoted string, or in permissive mode a bare word.
fn parse_key(cursor: &mut Cursor) -> Result<String> {
    match cursor.peek() {
        Some('"') => parse_string(cursor),
        Some(c) if is_bare_key_char(c) => {
            if cursor.ctx().strict {
                return Err(cursor.error(ParseError::BareKey(String::new())));
            }
            let mut key = String::new();
            while let Some(c) = cursor.peek().filter(|&c| is_bare_key_char(c)) {
                key.push(c);
                cursor.bump();
            }
            Ok(key)
        }
        Some(_) => Err(cursor.error(ParseError::ExpectedKey(String::new()))),
        None => Err(cursor.unexpected()),
    }
}

fn check_depth(cursor: &Cursor, depth: usize) -> Result<()> {
    if depth > cursor.ctx().max_depth {
        return Err(cursor.error(ParseError::NestingTooDeep(String::new())));
    }
    Ok(())
}

fn parse_array(cursor: &mut Cursor, depth: usize) -> Result<Value> {
    check_depth(cursor, depth)?;
    cursor.bump(); // [
    cursor.skip_whitespace();

    let mut items = Vec::new();
    if cursor.eat(']') {
        return Ok(Value::Array(items));
    }

    loop {
        items.push(parse_value(cursor, depth)?);
        cursor.skip_whitespace();

        if cursor.eat(',') {
            continue;
        }
        if cursor.eat(']') {
            return Ok(Value::Array(items));
        }
        return Err(cursor.error(ParseError::UnmatchedBracket(String::new())));
    }
}

fn parse_object(cursor: &mut Cursor, depth: usize) -> Result<Value> {
    check_depth(cursor, depth)?;
    cursor.bump(); // {
    cursor.skip_whitespace();

    let mut obj = HashMap::new();
    if cursor.eat('}') {
        return Ok(Value::Object(obj));
    }

    loop {
        let key = parse_key(cursor)?;
        cursor.skip_whitespace();

        if !cursor.eat(':') {
            return Err(cursor.error(ParseError::ExpectedColon(String::new())));
        }

        let value = parse_value(cursor, depth)?;
        // Later duplicates overwrite earlier ones.
        obj.insert(key, value);
        cursor.skip_whitespace();

        if cursor.eat(',') {
            cursor.skip_whitespace();
            continue;
        }
        if cursor.eat('}') {
            return Ok(Value::Object(obj));
        }
        return Err(cursor.error(ParseError::UnmatchedBrace(String::new())));
    }
}
