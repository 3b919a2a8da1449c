//! Implementation of the `j18s coverage` command.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use clap::Args;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::catalog_file::load_catalog;
use crate::output::report_load_error;
use crate::output::table::{format_coverage_table, LanguageCoverage, MissingKey};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Catalog whose keys every language should have (e.g., en.json).
    #[arg(long)]
    pub source: PathBuf,

    /// Comma-separated languages, read from `<lang>.json`.
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Where language catalogs live. Defaults to the source catalog's directory.
    #[arg(long)]
    pub translations: Option<PathBuf>,

    /// Exit with DATAERR when any language is missing keys.
    #[arg(long)]
    pub strict: bool,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// One language's row in `--json` output.
#[derive(Debug, Serialize)]
struct CoverageJson<'a> {
    language: &'a str,
    translated: usize,
    total: usize,
    missing: &'a [MissingKey],
}

/// Source keys of a catalog: `(context, text)` pairs.
type Keys = BTreeSet<(String, String)>;

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let source: Keys = load_catalog(&args.source)
        .map_err(report_load_error)?
        .keys()
        .into_iter()
        .collect();

    let base_dir = args
        .translations
        .clone()
        .or_else(|| args.source.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    let coverage = args
        .lang
        .iter()
        .map(|lang| language_coverage(&source, &base_dir, lang))
        .collect::<Result<Vec<_>>>()?;

    if args.json {
        let rows: Vec<CoverageJson<'_>> = coverage
            .iter()
            .map(|c| CoverageJson {
                language: &c.language,
                translated: c.translated,
                total: source.len(),
                missing: &c.missing,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows).into_diagnostic()?);
    } else {
        print_coverage(source.len(), &coverage);
    }

    let incomplete = coverage.iter().any(|c| !c.missing.is_empty());
    Ok(if args.strict && incomplete {
        exitcode::DATAERR
    } else {
        exitcode::OK
    })
}

/// Compare `<base_dir>/<lang>.json` against the source keys.
///
/// A missing file counts as an empty catalog.
fn language_coverage(source: &Keys, base_dir: &Path, lang: &str) -> Result<LanguageCoverage> {
    let path = base_dir.join(format!("{lang}.json"));
    let translated: Keys = if path.exists() {
        load_catalog(&path)
            .map_err(report_load_error)?
            .keys()
            .into_iter()
            .collect()
    } else {
        Keys::new()
    };

    let missing: Vec<MissingKey> = source
        .difference(&translated)
        .map(|(context, text)| MissingKey {
            context: context.clone(),
            text: text.clone(),
        })
        .collect();

    Ok(LanguageCoverage {
        language: lang.to_owned(),
        translated: source.len() - missing.len(),
        missing,
    })
}

fn print_coverage(total: usize, coverage: &[LanguageCoverage]) {
    println!("{}", format_coverage_table(total, coverage));

    for language in coverage.iter().filter(|c| !c.missing.is_empty()) {
        println!("\nMissing in {}:", language.language);
        for key in &language.missing {
            println!("  - [{}] {}", key.context, key.text);
        }
    }
}
