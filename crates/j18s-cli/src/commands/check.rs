//! Implementation of the `j18s check` command.

use std::path::PathBuf;

use j18s::Variant;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::catalog_file::{load_catalog, LoadedCatalog};
use crate::output::report_load_error;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Catalog files to check (.json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct CheckJson {
    file: String,
    language: Option<String>,
    error: Option<String>,
    warnings: Vec<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut results = Vec::with_capacity(args.files.len());

    for path in &args.files {
        match load_catalog(path) {
            Ok(catalog) => {
                let warnings = catalog_warnings(&catalog);
                if !args.json {
                    for warning in &warnings {
                        eprintln!("{} {}: {}", "warning:".yellow().bold(), path.display(), warning);
                    }
                    if warnings.is_empty() {
                        println!("{} {}", "ok".green(), path.display());
                    }
                }
                results.push(CheckJson {
                    file: path.display().to_string(),
                    language: Some(catalog.language),
                    error: None,
                    warnings,
                });
            }
            Err(e) => {
                let message = e.to_string();
                if !args.json {
                    eprintln!("{:?}", report_load_error(e));
                }
                results.push(CheckJson {
                    file: path.display().to_string(),
                    language: None,
                    error: Some(message),
                    warnings: Vec::new(),
                });
            }
        }
    }

    if args.json {
        let output = serde_json::to_string_pretty(&results)
            .map_err(|e| miette::miette!("JSON serialization failed: {}", e))?;
        println!("{output}");
    }

    let failed = results.iter().any(|r| r.error.is_some())
        || (args.strict && results.iter().any(|r| !r.warnings.is_empty()));
    if failed {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

/// Problems that do not stop a catalog from loading.
///
/// Reports empty translations, which resolve to the source text, and plural
/// arrays whose length differs from the rule's `nplurals`.
pub fn catalog_warnings(catalog: &LoadedCatalog) -> Vec<String> {
    let nplurals = catalog.selector.nplurals();
    let mut warnings = Vec::new();

    for (context, text) in catalog.keys() {
        let Some(variant) = catalog
            .contexts
            .get(&context)
            .and_then(|messages| messages.get(&text))
        else {
            continue;
        };

        match variant {
            Variant::Single(translation) if translation.is_empty() => {
                warnings.push(format!("{context}: '{text}' has an empty translation"));
            }
            Variant::Single(_) => {}
            Variant::Plural(forms) => {
                if let Some(expected) = nplurals {
                    if forms.len() != usize::try_from(expected).unwrap_or(usize::MAX) {
                        warnings.push(format!(
                            "{context}: '{text}' has {} forms but nplurals is {expected}",
                            forms.len()
                        ));
                    }
                }
                if forms.iter().any(String::is_empty) {
                    warnings.push(format!("{context}: '{text}' has an empty plural form"));
                }
            }
        }
    }

    warnings
}
