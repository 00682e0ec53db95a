//! Scalar cursor
//!
//! The parser reads its input one Unicode scalar value at a time through a
//! `Cursor`. The cursor owns the decoded scalars and a single lookahead
//! position; running past the end yields `None` rather than a sentinel
//! character.

use crate::error::{ParseContext, ParseError};

/// Whitespace as C's `isspace` defines it in the "C" locale.
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Position over a sequence of Unicode scalar values.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    chars: Vec<char>,
    index: usize,
    ctx: &'a ParseContext,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &str, ctx: &'a ParseContext) -> Self {
        Self {
            chars: source.chars().collect(),
            index: 0,
            ctx,
        }
    }

    pub fn ctx(&self) -> &ParseContext {
        self.ctx
    }

    /// Scalar under the cursor.
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    /// Scalar `offset` positions past the cursor.
    pub fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.index + offset).copied()
    }

    /// Consume and return the scalar under the cursor.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.index += 1;
        Some(c)
    }

    /// Move forward `n` scalars, stopping at the end of input.
    pub fn advance(&mut self, n: usize) {
        self.index = (self.index + n).min(self.chars.len());
    }

    /// Consume `expected` if it is next.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Whether the next scalars spell out `word`.
    pub fn looking_at(&self, word: &str) -> bool {
        word.chars()
            .enumerate()
            .all(|(i, c)| self.peek_at(i) == Some(c))
    }

    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_space) {
            self.index += 1;
        }
    }

    pub fn at_end(&self) -> bool {
        self.index >= self.chars.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Zero-based line and column of scalar `index`.
    fn line_col(&self, index: usize) -> (usize, usize) {
        let mut line = 0;
        let mut col = 0;
        for &c in &self.chars[..index.min(self.chars.len())] {
            if c == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (line, col)
    }

    /// Attach the cursor's current location to `err`.
    pub fn error(&self, err: ParseError) -> ParseError {
        self.error_at(self.index, err)
    }

    /// Attach the location of scalar `index` to `err`.
    pub fn error_at(&self, index: usize, err: ParseError) -> ParseError {
        let (line, col) = self.line_col(index);
        let err = err.with_location(self.ctx, line, col);
        log::trace!("parse failed at scalar {}: {}", index, err);
        err
    }

    /// Error for whatever is under the cursor: the offending scalar, or the
    /// end of input.
    pub fn unexpected(&self) -> ParseError {
        match self.peek() {
            Some(c) => self.error(ParseError::UnexpectedChar(c, String::new())),
            None => self.error(ParseError::UnexpectedEnd(String::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_and_bump() {
        let ctx = ParseContext::default();
        let mut cursor = Cursor::new("aé", &ctx);
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.bump(), Some('a'));
        assert_eq!(cursor.bump(), Some('é'));
        assert_eq!(cursor.bump(), None);
        assert!(cursor.at_end());
    }

    #[test]
    fn test_skip_whitespace() {
        let ctx = ParseContext::default();
        let mut cursor = Cursor::new(" \t\r\n\x0B\x0Cx", &ctx);
        cursor.skip_whitespace();
        assert_eq!(cursor.peek(), Some('x'));
        assert_eq!(cursor.index(), 6);
    }

    #[test]
    fn test_looking_at() {
        let ctx = ParseContext::default();
        let cursor = Cursor::new("nul", &ctx);
        assert!(cursor.looking_at("nu"));
        assert!(!cursor.looking_at("null"));
    }

    #[test]
    fn test_advance_clamps() {
        let ctx = ParseContext::default();
        let mut cursor = Cursor::new("ab", &ctx);
        cursor.advance(5);
        assert_eq!(cursor.index(), 2);
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_line_col() {
        let ctx = ParseContext::default();
        let mut cursor = Cursor::new("[\n  1,\n  x]", &ctx);
        cursor.advance(9);
        assert_eq!(cursor.peek(), Some('x'));
        assert_eq!(cursor.line_col(cursor.index()), (2, 2));
    }

    #[test]
    fn test_unexpected() {
        let ctx = ParseContext::default();
        let mut cursor = Cursor::new("@", &ctx);
        assert_eq!(cursor.unexpected().to_string(), "Unexpected character \"@\" at 1:1");
        cursor.bump();
        assert_eq!(cursor.unexpected().to_string(), "Unexpected end of input at 1:2");
    }
}
