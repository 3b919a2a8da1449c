//! Table formatting utilities for CLI output.

use std::collections::BTreeMap;

use comfy_table::{presets, ContentArrangement, Table};
use serde::Serialize;

/// A source string with no counterpart in a language catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingKey {
    pub context: String,
    pub text: String,
}

/// How much of the source catalog one language covers.
pub struct LanguageCoverage {
    pub language: String,
    /// Source strings present in the language catalog.
    pub translated: usize,
    /// Source strings absent from it, in `(context, text)` order.
    pub missing: Vec<MissingKey>,
}

impl LanguageCoverage {
    /// Missing strings counted per context.
    pub fn missing_by_context(&self) -> BTreeMap<&str, usize> {
        let mut contexts = BTreeMap::new();
        for key in &self.missing {
            *contexts.entry(key.context.as_str()).or_insert(0) += 1;
        }
        contexts
    }
}

/// One row per language: coverage ratio and the contexts with gaps.
pub fn format_coverage_table(source_count: usize, coverage: &[LanguageCoverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Language", "Translated", "Missing by context"]);

    for row in coverage {
        let gaps = row
            .missing_by_context()
            .into_iter()
            .map(|(context, count)| format!("{context} ({count})"))
            .collect::<Vec<_>>();
        let gaps = if gaps.is_empty() {
            "-".to_string()
        } else {
            gaps.join(", ")
        };
        table.add_row(vec![
            row.language.clone(),
            format!("{}/{source_count}", row.translated),
            gaps,
        ]);
    }

    table
}

/// Format count to form index pairs, grouped into runs of equal forms.
///
/// Consecutive counts selecting the same form share one row, so
/// `0, 1, 2..=4, 5..=20` read as four rows for a three-form rule.
pub fn format_plural_table(forms: &[(u64, usize)]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Counts", "Form"]);

    for (first, last, form) in form_runs(forms) {
        let counts = if first == last {
            first.to_string()
        } else {
            format!("{first}..={last}")
        };
        table.add_row(vec![counts, form.to_string()]);
    }

    table
}

/// Collapse consecutive counts with the same form into `(first, last, form)`.
fn form_runs(forms: &[(u64, usize)]) -> Vec<(u64, u64, usize)> {
    let mut runs: Vec<(u64, u64, usize)> = Vec::new();
    for &(count, form) in forms {
        match runs.last_mut() {
            Some((_, last, run_form)) if *run_form == form && *last + 1 == count => {
                *last = count;
            }
            _ => runs.push((count, count, form)),
        }
    }
    runs
}
