//! Error types for jsonish parsing and file helpers.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for jsonish parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Nesting depth allowed when the caller does not choose one.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Parse context carrying the filename, grammar mode and nesting limit.
#[derive(Clone, Debug)]
pub struct ParseContext {
    pub filename: Option<String>,
    pub strict: bool,
    pub max_depth: usize,
}

impl Default for ParseContext {
    fn default() -> Self {
        Self::new(None, false)
    }
}

impl ParseContext {
    /// Create a new parse context.
    pub fn new(filename: Option<&str>, strict: bool) -> Self {
        Self {
            filename: filename.map(String::from),
            strict,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Format a location suffix for error messages. `line` and `col` are
    /// zero-based.
    pub fn loc_suffix(&self, line: usize, col: usize) -> String {
        match &self.filename {
            Some(name) => format!(" at {}:{} of <{}>", line + 1, col + 1, name),
            None => format!(" at {}:{}", line + 1, col + 1),
        }
    }
}

/// Error type for jsonish parsing.
///
/// The trailing `String` in each variant is the location suffix. Callers
/// that only care whether parsing succeeded can discard the error with
/// `.ok()`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input ended where a value was expected.
    #[error("Unexpected end of input{0}")]
    UnexpectedEnd(String),

    /// No production starts with this character.
    #[error("Unexpected character \"{0}\"{1}")]
    UnexpectedChar(char, String),

    /// `null`, `true` or `false` misspelled or followed by a letter or digit.
    #[error("Invalid constant{0}")]
    InvalidConstant(String),

    /// Digits followed by a letter or digit that cannot continue a number.
    #[error("Invalid number{0}")]
    InvalidNumber(String),

    /// String ran past the end of input.
    #[error("Unterminated string{0}")]
    UnterminatedString(String),

    /// Object member does not start with a key.
    #[error("Expected key{0}")]
    ExpectedKey(String),

    /// Unquoted key in strict mode.
    #[error("Bare key not allowed{0}")]
    BareKey(String),

    /// Expected colon after key.
    #[error("Expected colon after key{0}")]
    ExpectedColon(String),

    /// Array not closed by `]`.
    #[error("Unmatched bracket{0}")]
    UnmatchedBracket(String),

    /// Object not closed by `}`.
    #[error("Unmatched brace{0}")]
    UnmatchedBrace(String),

    /// Non-whitespace after the top-level value in strict mode.
    #[error("Unexpected extra content{0}")]
    ExtraContent(String),

    /// Arrays and objects nested deeper than the configured limit.
    #[error("Nesting too deep{0}")]
    NestingTooDeep(String),
}

impl ParseError {
    /// Create an error with location information.
    pub fn with_location(self, ctx: &ParseContext, line: usize, col: usize) -> Self {
        let suffix = ctx.loc_suffix(line, col);
        match self {
            ParseError::UnexpectedEnd(_) => ParseError::UnexpectedEnd(suffix),
            ParseError::UnexpectedChar(c, _) => ParseError::UnexpectedChar(c, suffix),
            ParseError::InvalidConstant(_) => ParseError::InvalidConstant(suffix),
            ParseError::InvalidNumber(_) => ParseError::InvalidNumber(suffix),
            ParseError::UnterminatedString(_) => ParseError::UnterminatedString(suffix),
            ParseError::ExpectedKey(_) => ParseError::ExpectedKey(suffix),
            ParseError::BareKey(_) => ParseError::BareKey(suffix),
            ParseError::ExpectedColon(_) => ParseError::ExpectedColon(suffix),
            ParseError::UnmatchedBracket(_) => ParseError::UnmatchedBracket(suffix),
            ParseError::UnmatchedBrace(_) => ParseError::UnmatchedBrace(suffix),
            ParseError::ExtraContent(_) => ParseError::ExtraContent(suffix),
            ParseError::NestingTooDeep(_) => ParseError::NestingTooDeep(suffix),
        }
    }

    /// The location suffix this error was built with.
    pub fn location(&self) -> &str {
        match self {
            ParseError::UnexpectedEnd(s)
            | ParseError::UnexpectedChar(_, s)
            | ParseError::InvalidConstant(s)
            | ParseError::InvalidNumber(s)
            | ParseError::UnterminatedString(s)
            | ParseError::ExpectedKey(s)
            | ParseError::BareKey(s)
            | ParseError::ExpectedColon(s)
            | ParseError::UnmatchedBracket(s)
            | ParseError::UnmatchedBrace(s)
            | ParseError::ExtraContent(s)
            | ParseError::NestingTooDeep(s) => s,
        }
    }

    /// One-based `(line, column)` of the failure, when recorded.
    pub fn position(&self) -> Option<(usize, usize)> {
        let rest = self.location().strip_prefix(" at ")?;
        let coords = rest.split(' ').next()?;
        let (line, col) = coords.split_once(':')?;
        Some((line.parse().ok()?, col.parse().ok()?))
    }
}

/// Error type for the file helpers.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading or writing the file failed.
    #[error("Error accessing {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file contents did not parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loc_suffix_without_filename() {
        let ctx = ParseContext::new(None, false);
        assert_eq!(ctx.loc_suffix(0, 4), " at 1:5");
    }

    #[test]
    fn test_loc_suffix_with_filename() {
        let ctx = ParseContext::new(Some("config.json"), false);
        assert_eq!(ctx.loc_suffix(2, 0), " at 3:1 of <config.json>");
    }

    #[test]
    fn test_message_and_position() {
        let ctx = ParseContext::new(Some("a b.json"), false);
        let err = ParseError::UnexpectedChar('@', String::new()).with_location(&ctx, 1, 6);
        assert_eq!(err.to_string(), "Unexpected character \"@\" at 2:7 of <a b.json>");
        assert_eq!(err.position(), Some((2, 7)));
    }

    #[test]
    fn test_position_missing() {
        assert_eq!(ParseError::UnexpectedEnd(String::new()).position(), None);
    }
}
