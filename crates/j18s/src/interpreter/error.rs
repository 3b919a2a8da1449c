//! Error types for the j18s engine.
//!
//! Only plural rule compilation and host metadata writes are hard errors.
//! Missing translations, malformed stored counts and placeholders without an
//! argument degrade to a best-effort string instead.

use thiserror::Error;

use crate::parser::ParseError;

/// A plural rule expression failed to compile.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PluralRuleError {
    /// The expression is not valid rule syntax.
    #[error("invalid plural rule '{expression}' at column {column}: {message}")]
    Invalid {
        expression: String,
        column: usize,
        message: String,
    },

    /// The rule declares `nplurals` but never assigns `plural`.
    #[error("invalid plural rule '{expression}': no 'plural=' expression")]
    MissingExpression { expression: String },
}

impl PluralRuleError {
    /// Attach the offending expression to a parse error.
    pub(crate) fn from_parse(expression: &str, error: ParseError) -> Self {
        match error {
            ParseError::Syntax {
                column, message, ..
            } => PluralRuleError::Invalid {
                expression: expression.to_string(),
                column,
                message,
            },
            ParseError::TooDeep { column, limit, .. } => PluralRuleError::Invalid {
                expression: expression.to_string(),
                column,
                message: format!("expression nests deeper than {limit} levels"),
            },
            ParseError::MissingPluralExpression => PluralRuleError::MissingExpression {
                expression: expression.to_string(),
            },
        }
    }
}

/// A host refused an operation on a bound entity.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindingError {
    /// The entity's metadata store rejected a write.
    #[error("metadata write '{key}' rejected: {reason}")]
    Rejected { key: String, reason: String },

    /// The document was already borrowed when a refresh needed it.
    #[error("document is already borrowed, refresh skipped")]
    DocumentBusy,
}

/// Any hard error raised by the engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    PluralRule(#[from] PluralRuleError),

    #[error(transparent)]
    Binding(#[from] BindingError),
}
