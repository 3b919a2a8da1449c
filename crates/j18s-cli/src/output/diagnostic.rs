//! Miette diagnostic wrapper for catalog file errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use j18s::PluralRuleError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::catalog_file::CatalogFileError;

/// A miette-compatible diagnostic pointing into a catalog file.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(j18s::catalog))]
pub struct CatalogDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl CatalogDiagnostic {
    /// Create a diagnostic from a load error with source context.
    ///
    /// Returns None for errors without file content, such as I/O failures.
    pub fn from_error(err: &CatalogFileError) -> Option<Self> {
        match err {
            CatalogFileError::Io { .. } => None,
            CatalogFileError::Json {
                path,
                content,
                source,
            } => {
                let offset = line_column_offset(content, source.line(), source.column());
                Some(Self::new(
                    path,
                    content,
                    offset,
                    format!("invalid catalog: {source}"),
                    Some("catalogs map context names to { source text: translation }".into()),
                ))
            }
            CatalogFileError::Rule {
                path,
                content,
                source,
            } => {
                let offset = rule_offset(content, source);
                Some(Self::new(
                    path,
                    content,
                    offset,
                    source.to_string(),
                    Some("rules look like \"nplurals=2; plural=n != 1\"".into()),
                ))
            }
        }
    }

    fn new(
        path: &Path,
        content: &str,
        offset: usize,
        message: String,
        help: Option<String>,
    ) -> Self {
        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        CatalogDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message,
            help,
        }
    }
}

/// Turn a load error into a report, with source context where available.
pub fn report_load_error(err: CatalogFileError) -> miette::Report {
    match CatalogDiagnostic::from_error(&err) {
        Some(diagnostic) => diagnostic.into(),
        None => miette::miette!("{}", err),
    }
}

/// Convert a 1-based line:column to a byte offset.
fn line_column_offset(content: &str, line: usize, column: usize) -> usize {
    content
        .lines()
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum::<usize>()
        + column.saturating_sub(1)
}

/// Locate the failing column of a rule inside the file content.
///
/// Falls back to the start of the file when the rule text cannot be found
/// verbatim (for example when it contains JSON escapes).
fn rule_offset(content: &str, err: &PluralRuleError) -> usize {
    let (expression, column) = match err {
        PluralRuleError::Invalid {
            expression, column, ..
        } => (expression, *column),
        PluralRuleError::MissingExpression { expression } => (expression, 1),
    };
    content
        .find(expression.as_str())
        .map_or(0, |start| start + column.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_column_offset() {
        let content = "{\n  \"a\": 1,\n  oops\n}";
        assert_eq!(line_column_offset(content, 3, 3), 14);
        assert_eq!(&content[14..18], "oops");
    }

    #[test]
    fn test_rule_offset_points_into_expression() {
        let content = r#"{"pluralForms": "plural=n ! 1"}"#;
        let err = PluralRuleError::Invalid {
            expression: "plural=n ! 1".into(),
            column: 10,
            message: "unexpected character: '!'".into(),
        };
        let offset = rule_offset(content, &err);
        assert_eq!(&content[offset..=offset], "!");
    }
}
