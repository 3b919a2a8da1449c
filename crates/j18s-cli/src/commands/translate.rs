//! Implementation of the `j18s translate` command.

use std::path::PathBuf;

use j18s::{Engine, TranslateOptions, Value};
use serde::Serialize;

use crate::catalog_file::load_catalog;
use crate::output::report_load_error;

/// Arguments for the translate command.
#[derive(Debug, clap::Args)]
pub struct TranslateArgs {
    /// Source text to translate
    pub text: String,

    /// Catalog files to register (.json, repeatable)
    #[arg(short, long = "catalog")]
    pub catalogs: Vec<PathBuf>,

    /// Language to translate into
    #[arg(long, env = "J18S_LANG", default_value = "en")]
    pub lang: String,

    /// Untranslated plural text
    #[arg(long)]
    pub plural: Option<String>,

    /// Quantity selecting the plural form
    #[arg(short = 'n', long)]
    pub count: Option<u64>,

    /// Context grouping for the source text
    #[arg(long)]
    pub context: Option<String>,

    /// Placeholder arguments, in order (repeatable)
    #[arg(short, long = "arg")]
    pub args: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for translate results.
#[derive(Serialize)]
pub struct TranslateResult {
    pub language: String,
    pub form: usize,
    pub result: String,
}

/// Run the translate command.
pub fn run_translate(args: TranslateArgs) -> miette::Result<i32> {
    let mut engine = Engine::with_language(args.lang.as_str());

    for path in &args.catalogs {
        load_catalog(path)
            .map_err(report_load_error)?
            .register(&mut engine)
            .map_err(|e| miette::miette!("{}: {}", path.display(), e))?;
    }

    if !engine.catalog().contains(&args.lang) {
        tracing::debug!(language = %args.lang, "no catalog for language, output is untranslated");
    }

    // Integer-looking arguments become numbers, everything else stays text
    let values: Vec<Value> = args
        .args
        .iter()
        .map(|arg| match arg.parse::<i64>() {
            Ok(n) => Value::from(n),
            Err(_) => Value::from(arg),
        })
        .collect();

    let options = TranslateOptions {
        plural: args.plural,
        plural_count: args.count,
        context: args.context,
        language: None,
        args: values,
    };
    let result = engine.translate(&args.text, &options);

    if args.json {
        let output = TranslateResult {
            form: engine.plural_form(&args.lang, args.count.unwrap_or(1)),
            language: args.lang,
            result,
        };
        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| miette::miette!("JSON serialization failed: {}", e))?;
        println!("{json}");
    } else {
        println!("{result}");
    }
    Ok(exitcode::OK)
}
