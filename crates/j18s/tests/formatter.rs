//! Integration tests for placeholder substitution.

use j18s::{Value, args, format};

// =============================================================================
// Sequential placeholders
// =============================================================================

#[test]
fn test_sequential_substitution() {
    assert_eq!(
        format("Hello %s, you have %d messages", &args!["Ann", 5]),
        "Hello Ann, you have 5 messages"
    );
}

#[test]
fn test_missing_sequential_argument_stays_verbatim() {
    assert_eq!(format("%s and %s", &args!["X"]), "X and %s");
}

#[test]
fn test_no_arguments() {
    assert_eq!(format("%s and %d", &[]), "%s and %d");
}

#[test]
fn test_extra_arguments_are_ignored() {
    assert_eq!(format("only %s", &args!["one", "two"]), "only one");
}

#[test]
fn test_d_does_not_coerce() {
    assert_eq!(format("%d items", &args!["many"]), "many items");
    assert_eq!(format("%s items", &args![3]), "3 items");
}

#[test]
fn test_float_arguments() {
    assert_eq!(format("%s kg", &args![2.5]), "2.5 kg");
}

// =============================================================================
// Positional placeholders
// =============================================================================

#[test]
fn test_positional_reordering() {
    assert_eq!(format("%2$s before %1$s", &args!["B", "A"]), "A before B");
}

#[test]
fn test_positional_repeated() {
    assert_eq!(format("%1$s, %1$s!", &args!["Hey"]), "Hey, Hey!");
}

#[test]
fn test_missing_positional_argument_stays_verbatim() {
    assert_eq!(format("%3$s and %1$d", &args![7]), "%3$s and 7");
}

#[test]
fn test_positional_does_not_consume_sequential_arguments() {
    assert_eq!(format("%2$s: %s, %s", &args!["a", "b"]), "b: a, b");
}

#[test]
fn test_position_zero_reads_first_argument() {
    assert_eq!(format("%0$s", &args!["first"]), "first");
}

// =============================================================================
// Edge cases
// =============================================================================

#[test]
fn test_empty_template() {
    assert_eq!(format("", &args!["unused"]), "");
}

#[test]
fn test_substituted_text_is_not_rescanned() {
    assert_eq!(format("%s then %s", &args!["%s", "x"]), "%s then x");
    assert_eq!(format("%1$s", &args!["%2$s", "no"]), "%2$s");
}

#[test]
fn test_stray_percent_kept() {
    assert_eq!(format("100% of %s", &args!["tests"]), "100% of tests");
}

#[test]
fn test_value_conversions() {
    let values = vec![Value::from(1_u64), Value::from(String::from("s")), Value::from(-4)];
    assert_eq!(format("%s %s %s", &values), "1 s -4");
}
