//! Plural rule parser using winnow.
//!
//! Parses gettext `Plural-Forms` headers such as
//! `nplurals=3; plural=n%10==1 && n%100!=11 ? 0 : n != 0 ? 1 : 2`.
//! The expression grammar is the C subset gettext uses: integer literals,
//! the variable `n`, parentheses, `! -` prefixes, `* / %`, `+ -`,
//! `< <= > >=`, `== !=`, `&&`, `||` and the ternary `?:`, with C precedence.
//!
//! Nesting is capped at [`MAX_RULE_DEPTH`], both for the parser's own
//! recursion (parentheses, prefixes, conditionals) and for the depth of the
//! resulting tree (operator chains), so any accepted rule evaluates in
//! bounded stack.

use super::ast::{BinaryOp, Expr, PluralRuleAst, UnaryOp};
use super::error::ParseError;
use winnow::ascii::digit1;
use winnow::combinator::{
    alt, cut_err, delimited, fail, not, opt, preceded, repeat, separated, terminated,
};
use winnow::error::{ContextError, ErrMode, StrContext};
use winnow::prelude::*;
use winnow::token::take_while;

/// Deepest nesting a plural rule may use.
pub const MAX_RULE_DEPTH: usize = 64;

const DEPTH_LABEL: &str = "rule depth";

/// One `name=value` clause of a rule.
enum Assignment {
    NPlurals(u32),
    Plural(Expr),
}

/// A parser for one precedence level of operands.
type Level = fn(&mut &str, usize) -> ModalResult<Expr>;

/// A parser for the operators joining operands of one level.
type Operator = fn(&mut &str) -> ModalResult<BinaryOp>;

/// Parse a plural rule into an AST.
///
/// Clauses may appear in either order and the trailing `;` is optional.
/// When `plural` is assigned more than once, the last assignment wins.
pub fn parse_plural_rule(input: &str) -> Result<PluralRuleAst, ParseError> {
    let mut remaining = input;
    let assignments = match rule(&mut remaining) {
        Ok(assignments) if remaining.is_empty() => assignments,
        Err(ErrMode::Cut(error)) if exceeds_depth(&error) => {
            let (line, column) = calculate_position(input, remaining);
            return Err(ParseError::TooDeep {
                line,
                column,
                limit: MAX_RULE_DEPTH,
            });
        }
        _ => return Err(syntax_error(input, remaining)),
    };

    let mut nplurals = None;
    let mut plural = None;
    for assignment in assignments {
        match assignment {
            Assignment::NPlurals(n) => nplurals = Some(n),
            Assignment::Plural(expr) => plural = Some(expr),
        }
    }

    let plural = plural.ok_or(ParseError::MissingPluralExpression)?;
    Ok(PluralRuleAst { nplurals, plural })
}

/// Build a syntax error pointing at the first unconsumed character.
fn syntax_error(original: &str, remaining: &str) -> ParseError {
    let (line, column) = calculate_position(original, remaining);
    let message = match remaining.chars().next() {
        Some(c) => format!("unexpected character: '{c}'"),
        None => "unexpected end of input".to_string(),
    };
    ParseError::Syntax {
        line,
        column,
        message,
    }
}

/// Whether a parse stopped on the nesting limit.
fn exceeds_depth(error: &ContextError) -> bool {
    error
        .context()
        .any(|context| *context == StrContext::Label(DEPTH_LABEL))
}

/// Stop the whole parse: the rule nests too deeply.
fn too_deep<O>(input: &mut &str) -> ModalResult<O> {
    cut_err(fail::<_, O, _>.context(StrContext::Label(DEPTH_LABEL))).parse_next(input)
}

/// Accept a freshly built node only if the tree stays within the limit.
fn bounded(input: &mut &str, expr: Expr) -> ModalResult<Expr> {
    if depth(&expr) > MAX_RULE_DEPTH {
        too_deep(input)
    } else {
        Ok(expr)
    }
}

/// Number of nodes on the longest root-to-leaf path.
///
/// Only called on trees whose children were already bounded.
fn depth(expr: &Expr) -> usize {
    match expr {
        Expr::Number(_) | Expr::Variable => 1,
        Expr::Unary { operand, .. } => depth(operand) + 1,
        Expr::Binary { lhs, rhs, .. } => depth(lhs).max(depth(rhs)) + 1,
        Expr::Conditional {
            condition,
            then,
            otherwise,
        } => depth(condition).max(depth(then)).max(depth(otherwise)) + 1,
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let last_newline = consumed_str.rfind('\n');
    let column = match last_newline {
        Some(pos) => consumed - pos,
        None => consumed + 1,
    };
    (line, column)
}

/// Parse `;`-separated assignments with an optional trailing `;`.
fn rule(input: &mut &str) -> ModalResult<Vec<Assignment>> {
    let assignments: Vec<Assignment> = separated(1.., assignment, (ws, ';')).parse_next(input)?;
    (ws, opt(';'), ws).void().parse_next(input)?;
    Ok(assignments)
}

/// Parse `nplurals=N` or `plural=EXPR`.
fn assignment(input: &mut &str) -> ModalResult<Assignment> {
    preceded(
        ws,
        alt((
            preceded(("nplurals", ws, '=', ws), digit1.try_map(str::parse::<u32>))
                .map(Assignment::NPlurals),
            preceded(("plural", ws, '=', not('=')), |input: &mut &str| {
                expression(input, 0)
            })
            .map(Assignment::Plural),
        )),
    )
    .parse_next(input)
}

/// Parse optional whitespace.
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}

/// Parse a full expression: ternary, right-associative.
///
/// `depth` counts the enclosing parentheses, prefixes and conditionals.
fn expression(input: &mut &str, depth: usize) -> ModalResult<Expr> {
    if depth > MAX_RULE_DEPTH {
        return too_deep(input);
    }
    let condition = logical_or(input, depth)?;
    let branches = opt((
        preceded(ws, '?'),
        |input: &mut &str| expression(input, depth + 1),
        preceded(ws, ':'),
        |input: &mut &str| expression(input, depth + 1),
    ))
    .parse_next(input)?;

    match branches {
        Some((_, then, _, otherwise)) => {
            let conditional = Expr::Conditional {
                condition: Box::new(condition),
                then: Box::new(then),
                otherwise: Box::new(otherwise),
            };
            bounded(input, conditional)
        }
        None => Ok(condition),
    }
}

/// Parse a left-associative chain of `operand (operator operand)*`.
fn binary_chain(
    input: &mut &str,
    depth: usize,
    operand: Level,
    operator: Operator,
) -> ModalResult<Expr> {
    let first = operand(input, depth)?;
    let rest: Vec<(BinaryOp, Expr)> = repeat(
        0..,
        (preceded(ws, operator), |input: &mut &str| operand(input, depth)),
    )
    .parse_next(input)?;

    let mut chain = first;
    for (op, rhs) in rest {
        let node = Expr::Binary {
            op,
            lhs: Box::new(chain),
            rhs: Box::new(rhs),
        };
        chain = bounded(input, node)?;
    }
    Ok(chain)
}

fn logical_or(input: &mut &str, depth: usize) -> ModalResult<Expr> {
    binary_chain(input, depth, logical_and, or_op)
}

fn logical_and(input: &mut &str, depth: usize) -> ModalResult<Expr> {
    binary_chain(input, depth, equality, and_op)
}

fn equality(input: &mut &str, depth: usize) -> ModalResult<Expr> {
    binary_chain(input, depth, relational, equality_op)
}

fn relational(input: &mut &str, depth: usize) -> ModalResult<Expr> {
    binary_chain(input, depth, additive, relational_op)
}

fn additive(input: &mut &str, depth: usize) -> ModalResult<Expr> {
    binary_chain(input, depth, multiplicative, additive_op)
}

fn multiplicative(input: &mut &str, depth: usize) -> ModalResult<Expr> {
    binary_chain(input, depth, unary, multiplicative_op)
}

fn or_op(input: &mut &str) -> ModalResult<BinaryOp> {
    "||".value(BinaryOp::Or).parse_next(input)
}

fn and_op(input: &mut &str) -> ModalResult<BinaryOp> {
    "&&".value(BinaryOp::And).parse_next(input)
}

fn equality_op(input: &mut &str) -> ModalResult<BinaryOp> {
    alt(("==".value(BinaryOp::Eq), "!=".value(BinaryOp::Ne))).parse_next(input)
}

/// Two-character operators are tried before their one-character prefixes.
fn relational_op(input: &mut &str) -> ModalResult<BinaryOp> {
    alt((
        "<=".value(BinaryOp::Le),
        ">=".value(BinaryOp::Ge),
        '<'.value(BinaryOp::Lt),
        '>'.value(BinaryOp::Gt),
    ))
    .parse_next(input)
}

fn additive_op(input: &mut &str) -> ModalResult<BinaryOp> {
    alt(('+'.value(BinaryOp::Add), '-'.value(BinaryOp::Sub))).parse_next(input)
}

fn multiplicative_op(input: &mut &str) -> ModalResult<BinaryOp> {
    alt((
        '*'.value(BinaryOp::Mul),
        '/'.value(BinaryOp::Div),
        '%'.value(BinaryOp::Rem),
    ))
    .parse_next(input)
}

/// Parse a prefix expression: !e, -e, or a primary.
fn unary(input: &mut &str, depth: usize) -> ModalResult<Expr> {
    if depth > MAX_RULE_DEPTH {
        return too_deep(input);
    }
    let expr = preceded(
        ws,
        alt((
            preceded('!', |input: &mut &str| unary(input, depth + 1)).map(|operand| Expr::Unary {
                op: UnaryOp::Not,
                operand: Box::new(operand),
            }),
            preceded('-', |input: &mut &str| unary(input, depth + 1)).map(|operand| Expr::Unary {
                op: UnaryOp::Neg,
                operand: Box::new(operand),
            }),
            |input: &mut &str| primary(input, depth),
        )),
    )
    .parse_next(input)?;
    bounded(input, expr)
}

/// Parse a literal, the variable `n`, or a parenthesized expression.
fn primary(input: &mut &str, depth: usize) -> ModalResult<Expr> {
    alt((
        digit1.try_map(str::parse::<i64>).map(Expr::Number),
        terminated('n', not(take_while(1.., is_ident_cont))).value(Expr::Variable),
        delimited(
            '(',
            |input: &mut &str| expression(input, depth + 1),
            (ws, ')'),
        ),
    ))
    .parse_next(input)
}

/// Check if a character can continue an identifier.
fn is_ident_cont(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
