//! Error types for RQL.
//!
//! A single error channel for every fallible operation. Field-resolution
//! misses and pattern-compilation failures are not errors; they evaluate to
//! `false` at the condition level.

use thiserror::Error;

use crate::rql::ParseError;

/// Result type alias for RQL operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while applying a filter.
///
/// Error codes follow the pattern `RQL-XXX`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Filter text does not reduce to the grammar (RQL-001).
    #[error("[RQL-001] Syntax error: {0}")]
    Syntax(#[from] ParseError),

    /// Percent-decoding of the raw filter text failed (RQL-002).
    #[error("[RQL-002] Decode error: {0}")]
    Decode(String),

    /// Configuration error (RQL-003).
    #[error("[RQL-003] Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns the error code (e.g., "RQL-001").
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Syntax(_) => "RQL-001",
            Self::Decode(_) => "RQL-002",
            Self::Config(_) => "RQL-003",
        }
    }

    /// Returns the underlying parse error, if any.
    #[must_use]
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Syntax(e) => Some(e),
            _ => None,
        }
    }
}

/// Conversion from configuration errors.
impl From<crate::config::ConfigError> for Error {
    fn from(err: crate::config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
