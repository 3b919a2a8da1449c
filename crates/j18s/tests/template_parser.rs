//! Integration tests for template parsing.
//!
//! These tests validate the public API of the template parser against the
//! printf-style placeholder forms: `%s`, `%d`, `%N$s` and `%N$d`.

use j18s::parser::{Segment, parse_template};

fn literal(text: &str) -> Segment {
    Segment::Literal(text.into())
}

fn sequential(raw: &str) -> Segment {
    Segment::Sequential { raw: raw.into() }
}

fn positional(position: usize, raw: &str) -> Segment {
    Segment::Positional {
        position,
        raw: raw.into(),
    }
}

// =============================================================================
// Basic parsing
// =============================================================================

#[test]
fn test_pure_literal() {
    let t = parse_template("Hello, world!");
    assert_eq!(t.segments, vec![literal("Hello, world!")]);
}

#[test]
fn test_empty_string() {
    let t = parse_template("");
    assert_eq!(t.segments, vec![]);
}

#[test]
fn test_multiline_literal() {
    let t = parse_template("Line 1\nLine 2\nLine 3");
    assert_eq!(t.segments, vec![literal("Line 1\nLine 2\nLine 3")]);
}

// =============================================================================
// Sequential placeholders
// =============================================================================

#[test]
fn test_sequential_placeholders() {
    let t = parse_template("Hello %s, you have %d messages");
    assert_eq!(
        t.segments,
        vec![
            literal("Hello "),
            sequential("%s"),
            literal(", you have "),
            sequential("%d"),
            literal(" messages"),
        ]
    );
}

#[test]
fn test_adjacent_placeholders() {
    let t = parse_template("%s%d");
    assert_eq!(t.segments, vec![sequential("%s"), sequential("%d")]);
}

// =============================================================================
// Positional placeholders
// =============================================================================

#[test]
fn test_positional_placeholders() {
    let t = parse_template("%2$s before %1$d");
    assert_eq!(
        t.segments,
        vec![
            positional(2, "%2$s"),
            literal(" before "),
            positional(1, "%1$d"),
        ]
    );
}

#[test]
fn test_multi_digit_position() {
    let t = parse_template("%12$s");
    assert_eq!(t.segments, vec![positional(12, "%12$s")]);
}

#[test]
fn test_mixed_placeholders() {
    let t = parse_template("%1$s has %d items");
    assert_eq!(
        t.segments,
        vec![
            positional(1, "%1$s"),
            literal(" has "),
            sequential("%d"),
            literal(" items"),
        ]
    );
}

// =============================================================================
// Stray percent signs stay literal
// =============================================================================

#[test]
fn test_percent_sign_alone() {
    let t = parse_template("100% sure");
    assert_eq!(t.segments, vec![literal("100% sure")]);
}

#[test]
fn test_trailing_percent() {
    let t = parse_template("50%");
    assert_eq!(t.segments, vec![literal("50%")]);
}

#[test]
fn test_unknown_conversion_is_literal() {
    let t = parse_template("%x and %f");
    assert_eq!(t.segments, vec![literal("%x and %f")]);
}

#[test]
fn test_incomplete_positional_is_literal() {
    let t = parse_template("%1$ and %2x");
    assert_eq!(t.segments, vec![literal("%1$ and %2x")]);
}

#[test]
fn test_double_percent_before_placeholder() {
    let t = parse_template("%%s");
    assert_eq!(t.segments, vec![literal("%"), sequential("%s")]);
}

#[test]
fn test_unicode_literals() {
    let t = parse_template("Привет, %s! 👋");
    assert_eq!(
        t.segments,
        vec![literal("Привет, "), sequential("%s"), literal("! 👋")]
    );
}
