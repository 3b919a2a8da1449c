//! Parse error types for j18s.

use thiserror::Error;

/// An error that occurred while parsing a plural rule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A syntax error with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// The rule nests deeper than the parser accepts.
    #[error("rule nests deeper than {limit} levels at {line}:{column}")]
    TooDeep {
        line: usize,
        column: usize,
        limit: usize,
    },

    /// The rule never assigns `plural`.
    #[error("rule has no 'plural=' expression")]
    MissingPluralExpression,
}
