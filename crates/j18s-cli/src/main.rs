//! j18s CLI entry point.
//!
//! Provides command-line tools for working with j18s JSON catalogs:
//! - `j18s translate` - Translate a string against catalogs
//! - `j18s plural` - Show the forms a plural rule selects
//! - `j18s check` - Validate catalog files
//! - `j18s coverage` - Report translation coverage across languages

mod catalog_file;
mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_coverage, run_plural, run_translate, CheckArgs, CoverageArgs, PluralArgs,
    TranslateArgs,
};
use tracing_subscriber::EnvFilter;

/// Work with j18s JSON translation catalogs.
#[derive(Debug, Parser)]
#[command(name = "j18s", version, about, long_about = None)]
pub struct Cli {
    /// When to color output
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Log library events to stderr (RUST_LOG overrides the level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color mode for terminal output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Translate a string using JSON catalogs
    Translate(TranslateArgs),
    /// Show which form a plural rule selects for a range of counts
    Plural(PluralArgs),
    /// Check catalog files for errors
    Check(CheckArgs),
    /// Report translation coverage across languages
    Coverage(CoverageArgs),
}

impl ColorWhen {
    /// Force colors on or off. `Auto` leaves detection (TTY, `NO_COLOR`,
    /// `FORCE_COLOR`) to owo-colors.
    fn apply(self) {
        match self {
            ColorWhen::Auto => {}
            ColorWhen::Always => owo_colors::set_override(true),
            ColorWhen::Never => owo_colors::set_override(false),
        }
    }
}

/// Send library tracing to stderr. `RUST_LOG` overrides the default level.
fn setup_logging(verbose: bool) {
    if !verbose {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("j18s=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let outcome = match cli.command {
        Commands::Translate(args) => run_translate(args),
        Commands::Plural(args) => run_plural(args),
        Commands::Check(args) => run_check(args),
        Commands::Coverage(args) => run_coverage(args),
    };

    let code = outcome.unwrap_or_else(|report| {
        eprintln!("{report:?}");
        exitcode::SOFTWARE
    });
    exit(code)
}
