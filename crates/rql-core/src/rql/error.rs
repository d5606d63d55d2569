//! Error types for RQL parsing.

use std::fmt;

/// Error that occurred while parsing filter text.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// Kind of error.
    pub kind: ParseErrorKind,
    /// Byte position in the input where the error occurred.
    pub position: usize,
    /// The problematic input fragment.
    pub fragment: String,
    /// Human-readable message.
    pub message: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(
        kind: ParseErrorKind,
        position: usize,
        fragment: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            position,
            fragment: fragment.into(),
            message: message.into(),
        }
    }

    /// Creates a syntax error.
    #[must_use]
    pub fn syntax(
        position: usize,
        fragment: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(ParseErrorKind::SyntaxError, position, fragment, message)
    }

    /// Creates an error for parentheses nested deeper than `max`.
    #[must_use]
    pub fn nesting_too_deep(position: usize, fragment: impl Into<String>, max: usize) -> Self {
        Self::new(
            ParseErrorKind::NestingTooDeep,
            position,
            fragment,
            format!("Parentheses nested deeper than {max} levels"),
        )
    }

    /// Creates an error for an `ANY(...)` operand used outside `=`/`!=`.
    #[must_use]
    pub fn unsupported_any(position: usize, fragment: impl Into<String>, operator: &str) -> Self {
        Self::new(
            ParseErrorKind::UnsupportedAnyOperator,
            position,
            fragment,
            format!("ANY(...) cannot be combined with operator '{operator}'"),
        )
    }

    /// Creates an error for filter text longer than the configured maximum.
    #[must_use]
    pub fn too_long(length: usize, max: usize) -> Self {
        Self::new(
            ParseErrorKind::FilterTooLong,
            max,
            String::new(),
            format!("Filter is {length} bytes long, maximum is {max}"),
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} at position {}",
            self.kind.code(),
            self.message,
            self.position
        )
    }
}

impl std::error::Error for ParseError {}

/// Kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Text does not reduce to the grammar (E001).
    SyntaxError,
    /// Parentheses nested beyond [`crate::rql::MAX_NESTING_DEPTH`] (E002).
    NestingTooDeep,
    /// `ANY(...)` used with an operator other than `=`/`!=` (E003).
    UnsupportedAnyOperator,
    /// Filter text exceeds the configured length (E004).
    FilterTooLong,
}

impl ParseErrorKind {
    /// Returns the error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::SyntaxError => "E001",
            Self::NestingTooDeep => "E002",
            Self::UnsupportedAnyOperator => "E003",
            Self::FilterTooLong => "E004",
        }
    }
}
