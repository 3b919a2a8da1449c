//! Integration tests for plural rule parsing and form selection.

use j18s::parser::{
    BinaryOp, Expr, MAX_RULE_DEPTH, ParseError, PluralRuleAst, parse_plural_rule,
};
use j18s::{DEFAULT_PLURAL_RULE, PluralRuleError, PluralSelector};

const RUSSIAN: &str = "nplurals=3; plural=n%10==1 && n%100!=11 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2";

const POLISH: &str =
    "nplurals=3; plural=(n==1 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2);";

fn compile(rule: &str) -> PluralSelector {
    PluralSelector::compile(Some(rule)).unwrap()
}

// =============================================================================
// Default rule
// =============================================================================

#[test]
fn test_default_rule_selects_plural_for_zero() {
    let selector = compile(DEFAULT_PLURAL_RULE);
    assert_eq!(selector.select(0), 1);
    assert_eq!(selector.select(1), 0);
    assert_eq!(selector.select(2), 1);
}

#[test]
fn test_missing_rule_installs_default() {
    let selector = PluralSelector::compile(None).unwrap();
    assert_eq!(selector.source(), Some(DEFAULT_PLURAL_RULE));
    assert_eq!(selector.nplurals(), Some(2));
    assert_eq!(selector.select(0), 1);
    assert_eq!(selector.select(1), 0);
}

#[test]
fn test_blank_rule_installs_default() {
    let selector = PluralSelector::compile(Some("   ")).unwrap();
    assert_eq!(selector.source(), Some(DEFAULT_PLURAL_RULE));
}

#[test]
fn test_default_selector_matches_compiled_default() {
    let built = PluralSelector::default();
    let compiled = compile(DEFAULT_PLURAL_RULE);
    for n in 0..50 {
        assert_eq!(built.select(n), compiled.select(n), "count {n}");
    }
}

// =============================================================================
// Real language rules
// =============================================================================

#[test]
fn test_russian_rule() {
    let selector = compile(RUSSIAN);
    assert_eq!(selector.nplurals(), Some(3));
    assert_eq!(selector.select(0), 2);
    assert_eq!(selector.select(1), 0);
    assert_eq!(selector.select(2), 1);
    assert_eq!(selector.select(4), 1);
    assert_eq!(selector.select(5), 2);
    assert_eq!(selector.select(11), 2);
    assert_eq!(selector.select(12), 2);
    assert_eq!(selector.select(21), 0);
    assert_eq!(selector.select(22), 1);
    assert_eq!(selector.select(111), 2);
}

#[test]
fn test_polish_rule_with_parentheses_and_trailing_semicolon() {
    let selector = compile(POLISH);
    assert_eq!(selector.select(1), 0);
    assert_eq!(selector.select(2), 1);
    assert_eq!(selector.select(5), 2);
    assert_eq!(selector.select(12), 2);
    assert_eq!(selector.select(22), 1);
}

#[test]
fn test_single_form_rule() {
    let selector = compile("nplurals=1; plural=0;");
    assert_eq!(selector.nplurals(), Some(1));
    assert_eq!(selector.select(0), 0);
    assert_eq!(selector.select(1), 0);
    assert_eq!(selector.select(100), 0);
}

#[test]
fn test_french_rule() {
    let selector = compile("nplurals=2; plural=n>1");
    assert_eq!(selector.select(0), 0);
    assert_eq!(selector.select(1), 0);
    assert_eq!(selector.select(2), 1);
}

// =============================================================================
// Syntax
// =============================================================================

#[test]
fn test_parse_default_rule_ast() {
    let ast = parse_plural_rule(DEFAULT_PLURAL_RULE).unwrap();
    assert_eq!(
        ast,
        PluralRuleAst {
            nplurals: Some(2),
            plural: Expr::Binary {
                op: BinaryOp::Ne,
                lhs: Box::new(Expr::Variable),
                rhs: Box::new(Expr::Number(1)),
            },
        }
    );
}

#[test]
fn test_clauses_in_any_order() {
    let selector = compile("plural=n>1; nplurals=2");
    assert_eq!(selector.nplurals(), Some(2));
    assert_eq!(selector.select(0), 0);
    assert_eq!(selector.select(2), 1);
}

#[test]
fn test_nplurals_is_optional() {
    let selector = compile("plural=n != 1");
    assert_eq!(selector.nplurals(), None);
    assert_eq!(selector.select(1), 0);
}

#[test]
fn test_whitespace_everywhere() {
    let selector = compile("  nplurals = 2 ;  plural = ( n != 1 ) ; ");
    assert_eq!(selector.select(1), 0);
    assert_eq!(selector.select(3), 1);
}

#[test]
fn test_ternary_is_right_associative() {
    let selector = compile("plural=n==0 ? 0 : n==1 ? 1 : 2");
    assert_eq!(selector.select(0), 0);
    assert_eq!(selector.select(1), 1);
    assert_eq!(selector.select(7), 2);
}

#[test]
fn test_operator_precedence() {
    assert_eq!(compile("plural=1 + 2 * n").select(2), 5);
    assert_eq!(compile("plural=(1 + 2) * n").select(2), 6);
    assert_eq!(compile("plural=10 - 4 - 3").select(0), 3);
    assert_eq!(compile("plural=n > 1 == 1").select(5), 1);
}

#[test]
fn test_integer_division_truncates() {
    assert_eq!(compile("plural=n / 10").select(25), 2);
    assert_eq!(compile("plural=n % 10").select(25), 5);
}

#[test]
fn test_two_character_relational_operators() {
    let selector = compile("plural=n >= 2");
    assert_eq!(selector.select(1), 0);
    assert_eq!(selector.select(2), 1);

    let selector = compile("plural=n<=1 ? 0 : 1");
    assert_eq!(selector.select(1), 0);
    assert_eq!(selector.select(2), 1);
}

#[test]
fn test_unary_operators() {
    let selector = compile("plural=!(n == 1)");
    assert_eq!(selector.select(1), 0);
    assert_eq!(selector.select(2), 1);

    assert_eq!(compile("plural=-n + 5").select(2), 3);
}

#[test]
fn test_logical_operators_produce_zero_or_one() {
    assert_eq!(compile("plural=n && 7").select(3), 1);
    assert_eq!(compile("plural=0 || n").select(9), 1);
    assert_eq!(compile("plural=n || 0").select(0), 0);
}

#[test]
fn test_last_plural_assignment_wins() {
    let selector = compile("plural=0; plural=n != 1");
    assert_eq!(selector.select(2), 1);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_incomplete_expression_is_rejected() {
    let err = PluralSelector::compile(Some("nplurals=2; plural=n +")).unwrap_err();
    assert!(matches!(err, PluralRuleError::Invalid { .. }));
}

#[test]
fn test_unbalanced_parenthesis_is_rejected() {
    let err = PluralSelector::compile(Some("plural=(n != 1")).unwrap_err();
    assert!(matches!(err, PluralRuleError::Invalid { .. }));
}

#[test]
fn test_unknown_variable_is_rejected() {
    assert!(PluralSelector::compile(Some("plural=x != 1")).is_err());
    assert!(PluralSelector::compile(Some("plural=nn != 1")).is_err());
}

#[test]
fn test_trailing_garbage_reports_column() {
    let err = PluralSelector::compile(Some("nplurals=2; plural=n != 1; garbage")).unwrap_err();
    assert_eq!(
        err,
        PluralRuleError::Invalid {
            expression: "nplurals=2; plural=n != 1; garbage".to_string(),
            column: 28,
            message: "unexpected character: 'g'".to_string(),
        }
    );
}

#[test]
fn test_rule_without_plural_expression_is_rejected() {
    let err = PluralSelector::compile(Some("nplurals=2")).unwrap_err();
    assert_eq!(
        err,
        PluralRuleError::MissingExpression {
            expression: "nplurals=2".to_string()
        }
    );
}

#[test]
fn test_error_message_names_expression() {
    let err = PluralSelector::compile(Some("plural=n ! 1")).unwrap_err();
    assert!(err.to_string().contains("plural=n ! 1"));
}

// =============================================================================
// Nesting limit
// =============================================================================

fn assert_too_deep(rule: &str) {
    match PluralSelector::compile(Some(rule)) {
        Err(PluralRuleError::Invalid { message, .. }) => {
            assert!(message.contains("deeper than"), "message: {message}");
        }
        other => panic!("expected a nesting error, got {other:?}"),
    }
}

#[test]
fn test_long_operator_chain_is_rejected_at_compile_time() {
    assert_too_deep(&format!("plural=n{}", "+0".repeat(200_000)));
}

#[test]
fn test_deep_parentheses_are_rejected() {
    let rule = format!("plural={}n{}", "(".repeat(100_000), ")".repeat(100_000));
    assert_too_deep(&rule);
}

#[test]
fn test_deep_prefix_operators_are_rejected() {
    assert_too_deep(&format!("plural={}n", "!".repeat(100_000)));
    assert_too_deep(&format!("plural={}n", "-".repeat(100_000)));
}

#[test]
fn test_deep_conditional_chain_is_rejected() {
    assert_too_deep(&format!("plural={}0", "n==0 ? 0 : ".repeat(10_000)));
}

#[test]
fn test_parser_reports_nesting_limit() {
    let rule = format!("plural={}n{}", "(".repeat(1_000), ")".repeat(1_000));
    assert!(matches!(
        parse_plural_rule(&rule),
        Err(ParseError::TooDeep {
            limit: MAX_RULE_DEPTH,
            ..
        })
    ));
}

#[test]
fn test_chain_within_limit_compiles_and_selects() {
    let rule = format!("plural=n{}", "+0".repeat(MAX_RULE_DEPTH - 1));
    let selector = compile(&rule);
    assert_eq!(selector.select(1), 1);
    assert_eq!(selector.select(7), 7);
}

#[test]
fn test_moderate_parentheses_compile() {
    let rule = format!("plural={}n != 1{}", "(".repeat(32), ")".repeat(32));
    let selector = compile(&rule);
    assert_eq!(selector.select(1), 0);
    assert_eq!(selector.select(2), 1);
}

// =============================================================================
// Native selectors
// =============================================================================

#[test]
fn test_native_selector_is_used_verbatim() {
    let selector = PluralSelector::from_fn(|n| match n {
        0 => 2,
        1 => 0,
        _ => 1,
    });
    assert_eq!(selector.select(0), 2);
    assert_eq!(selector.select(1), 0);
    assert_eq!(selector.select(9), 1);
    assert_eq!(selector.source(), None);
    assert_eq!(selector.nplurals(), None);
}

#[test]
fn test_huge_count_does_not_panic() {
    let selector = compile(RUSSIAN);
    let _ = selector.select(u64::MAX);
    assert_eq!(compile("plural=n * n").select(u64::MAX), 0);
}
