//! Implementation of the `j18s plural` command.

use j18s::PluralSelector;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::output::table::format_plural_table;

/// Arguments for the plural command.
#[derive(Debug, clap::Args)]
pub struct PluralArgs {
    /// Plural rule, e.g. "nplurals=2; plural=n != 1"
    pub rule: String,

    /// First count to evaluate
    #[arg(long, default_value_t = 0)]
    pub from: u64,

    /// Last count to evaluate (inclusive)
    #[arg(long, default_value_t = 30)]
    pub to: u64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Most counts one invocation evaluates.
const MAX_COUNTS: u64 = 10_000;

/// JSON output for one evaluated count.
#[derive(Serialize)]
struct PluralJson {
    count: u64,
    form: usize,
}

/// Run the plural command.
pub fn run_plural(args: PluralArgs) -> miette::Result<i32> {
    let selector = match PluralSelector::compile(Some(&args.rule)) {
        Ok(selector) => selector,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            return Ok(exitcode::DATAERR);
        }
    };

    if let Some(message) = range_error(args.from, args.to) {
        eprintln!("{} {message}", "error:".red().bold());
        return Ok(exitcode::USAGE);
    }

    let forms: Vec<(u64, usize)> = (args.from..=args.to)
        .map(|count| (count, selector.select(count)))
        .collect();

    if args.json {
        let json: Vec<PluralJson> = forms
            .iter()
            .map(|&(count, form)| PluralJson { count, form })
            .collect();
        let output = serde_json::to_string_pretty(&json)
            .map_err(|e| miette::miette!("JSON serialization failed: {}", e))?;
        println!("{output}");
        return Ok(exitcode::OK);
    }

    println!("{}", format_plural_table(&forms));

    // Flag indexes the rule's own nplurals says cannot exist
    if let Some(nplurals) = selector.nplurals() {
        let limit = usize::try_from(nplurals).unwrap_or(usize::MAX);
        if let Some(&(count, form)) = forms.iter().find(|(_, form)| *form >= limit) {
            eprintln!(
                "{} count {} selects form {} but nplurals is {}",
                "warning:".yellow().bold(),
                count,
                form,
                nplurals
            );
        }
    }
    Ok(exitcode::OK)
}

/// Why a `--from`/`--to` pair cannot be evaluated, if it cannot.
fn range_error(from: u64, to: u64) -> Option<String> {
    if from > to {
        Some(format!("--from {from} is greater than --to {to}"))
    } else if to - from >= MAX_COUNTS {
        Some(format!(
            "--from {from} --to {to} covers more than {MAX_COUNTS} counts"
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_error_accepts_default_range() {
        assert_eq!(range_error(0, 30), None);
        assert_eq!(range_error(7, 7), None);
    }

    #[test]
    fn test_range_error_rejects_reversed_range() {
        let message = range_error(5, 1).unwrap();
        assert!(message.contains("greater than"), "{message}");
    }

    #[test]
    fn test_range_error_caps_range_size() {
        assert_eq!(range_error(0, MAX_COUNTS - 1), None);
        assert!(range_error(0, MAX_COUNTS).is_some());
        assert!(range_error(0, u64::MAX).is_some());
        assert!(range_error(u64::MAX - MAX_COUNTS, u64::MAX).is_some());
        assert_eq!(range_error(u64::MAX - 3, u64::MAX), None);
    }
}
