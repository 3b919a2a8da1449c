//! j18s interpreter for resolving translations.
//!
//! This module provides the engine that takes registered catalogs and
//! produces formatted strings. It compiles plural rules, walks the fallback
//! cascade for each request, and substitutes placeholder arguments.

mod catalog;
mod engine;
mod error;
mod plural;
mod resolver;

pub use catalog::{Catalog, Contexts, LanguageEntry, Messages, compute_suggestions};
pub use engine::Engine;
pub use error::{BindingError, Error, PluralRuleError};
pub use plural::{DEFAULT_PLURAL_RULE, PluralRule, PluralSelector};
pub use resolver::{plural_form, resolve};
