//! Substitutes placeholder arguments into resolved translation strings.
//!
//! Two placeholder forms are supported:
//! - Positional `%N$s` / `%N$d`, reading the N-th argument (1-based).
//! - Sequential `%s` / `%d`, reading arguments left to right. Positional
//!   placeholders do not consume arguments.
//!
//! A placeholder without a matching argument is emitted verbatim. The template
//! is tokenized once, so text inserted from an argument is never scanned for
//! further placeholders.

use crate::parser::{Segment, Template, parse_template};
use crate::types::Value;

/// Format a template string with arguments.
///
/// # Example
///
/// ```
/// use j18s::{Value, format};
///
/// let args = [Value::from("Ann"), Value::from(5)];
/// assert_eq!(
///     format("Hello %s, you have %d messages", &args),
///     "Hello Ann, you have 5 messages"
/// );
///
/// let args = [Value::from("B"), Value::from("A")];
/// assert_eq!(format("%2$s before %1$s", &args), "A before B");
///
/// assert_eq!(format("%s and %s", &[Value::from("X")]), "X and %s");
/// ```
pub fn format(template: &str, args: &[Value]) -> String {
    format_template(&parse_template(template), args)
}

/// Format an already parsed template.
///
/// `%0$s` reads the first argument, like `%1$s`.
pub fn format_template(template: &Template, args: &[Value]) -> String {
    let mut output = String::new();
    let mut sequential = args.iter();

    for segment in &template.segments {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Positional { position, raw } => {
                match args.get(position.saturating_sub(1)) {
                    Some(value) => output.push_str(&value.to_string()),
                    None => output.push_str(raw),
                }
            }
            Segment::Sequential { raw } => match sequential.next() {
                Some(value) => output.push_str(&value.to_string()),
                None => output.push_str(raw),
            },
        }
    }

    output
}
