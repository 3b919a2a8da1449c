//! Placeholder template parser using winnow.
//!
//! Splits a translated string into literal text and printf-style placeholders:
//! - Positional placeholders: `%1$s`, `%2$d`
//! - Sequential placeholders: `%s`, `%d`
//!
//! Any `%` that does not begin one of these stays literal text, so parsing
//! never fails.

use super::ast::{Segment, Template};
use winnow::ascii::digit1;
use winnow::combinator::{alt, repeat};
use winnow::prelude::*;
use winnow::token::{any, one_of, take_till};

/// Parse a template string into literal and placeholder segments.
pub fn parse_template(input: &str) -> Template {
    let mut remaining = input;
    match template(&mut remaining) {
        Ok(mut t) => {
            if !remaining.is_empty() {
                t.segments.push(Segment::Literal(remaining.to_string()));
            }
            t
        }
        Err(_) => Template {
            segments: vec![Segment::Literal(input.to_string())],
        },
    }
}

/// Parse a complete template into segments.
fn template(input: &mut &str) -> ModalResult<Template> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(Template {
        segments: merge_literals(segments),
    })
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

/// Parse a single segment (placeholder or literal).
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((positional, sequential, literal_run, stray_char)).parse_next(input)
}

/// Parse a positional placeholder: %N$s or %N$d
fn positional(input: &mut &str) -> ModalResult<Segment> {
    ('%', digit1.try_map(str::parse::<usize>), '$', one_of(['s', 'd']))
        .with_taken()
        .map(|((_, position, _, _), raw): ((char, usize, char, char), &str)| {
            Segment::Positional {
                position,
                raw: raw.to_string(),
            }
        })
        .parse_next(input)
}

/// Parse a sequential placeholder: %s or %d
fn sequential(input: &mut &str) -> ModalResult<Segment> {
    ('%', one_of(['s', 'd']))
        .take()
        .map(|raw: &str| Segment::Sequential {
            raw: raw.to_string(),
        })
        .parse_next(input)
}

/// Parse a run of text containing no `%`.
fn literal_run(input: &mut &str) -> ModalResult<Segment> {
    take_till(1.., '%')
        .map(|s: &str| Segment::Literal(s.to_string()))
        .parse_next(input)
}

/// Parse a `%` that starts no placeholder.
fn stray_char(input: &mut &str) -> ModalResult<Segment> {
    any.map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}
