//! CLI command implementations.

mod check;
mod coverage;
mod plural;
mod translate;

pub use check::{run_check, CheckArgs};
pub use coverage::{run_coverage, CoverageArgs};
pub use plural::{run_plural, PluralArgs};
pub use translate::{run_translate, TranslateArgs};
