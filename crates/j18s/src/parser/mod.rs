//! Parsers for gettext plural rules and printf-style templates.
//!
//! This module turns rule expressions and translated strings into ASTs that
//! the interpreter evaluates. Both parsers are built on winnow.

pub mod ast;
pub mod error;
mod plural;
mod template;

pub use ast::*;
pub use error::ParseError;
pub use plural::{MAX_RULE_DEPTH, parse_plural_rule};
pub use template::parse_template;
