//! Plural form selection.
//!
//! A [`PluralSelector`] maps a count to a zero-based form index. Selectors are
//! compiled once from a gettext rule expression when a language is registered,
//! or wrap a native function supplied by the caller. Rule expressions are
//! evaluated by a small interpreter over the parsed AST; no code is generated.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use crate::interpreter::error::PluralRuleError;
use crate::parser::{BinaryOp, Expr, PluralRuleAst, UnaryOp, parse_plural_rule};

/// The rule installed when a language registers without one.
pub const DEFAULT_PLURAL_RULE: &str = "nplurals=2; plural=n != 1";

/// A compiled plural rule: a pure function from count to form index.
///
/// # Example
///
/// ```
/// use j18s::PluralSelector;
///
/// let russian = PluralSelector::compile(Some(
///     "nplurals=3; plural=n%10==1 && n%100!=11 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2",
/// ))
/// .unwrap();
///
/// assert_eq!(russian.select(1), 0);
/// assert_eq!(russian.select(3), 1);
/// assert_eq!(russian.select(5), 2);
/// assert_eq!(russian.select(21), 0);
/// ```
#[derive(Clone)]
pub struct PluralSelector {
    kind: SelectorKind,
}

#[derive(Clone)]
enum SelectorKind {
    Rule {
        source: Arc<str>,
        ast: Arc<PluralRuleAst>,
    },
    Native(Arc<dyn Fn(u64) -> usize + Send + Sync>),
}

impl PluralSelector {
    /// Compile a rule expression.
    ///
    /// `None` or a blank expression installs [`DEFAULT_PLURAL_RULE`]. Syntax
    /// errors are reported here, never at selection time.
    pub fn compile(expression: Option<&str>) -> Result<Self, PluralRuleError> {
        let Some(expression) = expression.filter(|e| !e.trim().is_empty()) else {
            return Ok(Self::default());
        };

        let ast = parse_plural_rule(expression)
            .map_err(|e| PluralRuleError::from_parse(expression, e))?;

        Ok(Self {
            kind: SelectorKind::Rule {
                source: Arc::from(expression),
                ast: Arc::new(ast),
            },
        })
    }

    /// Wrap a native selector function, used verbatim.
    pub fn from_fn(selector: impl Fn(u64) -> usize + Send + Sync + 'static) -> Self {
        Self {
            kind: SelectorKind::Native(Arc::new(selector)),
        }
    }

    /// Select the form index for a count.
    ///
    /// A rule whose evaluation fails (division by zero, overflow) or yields a
    /// negative number selects form 0.
    pub fn select(&self, count: u64) -> usize {
        match &self.kind {
            SelectorKind::Rule { ast, .. } => {
                let n = i64::try_from(count).unwrap_or(i64::MAX);
                evaluate(&ast.plural, n)
                    .and_then(|index| usize::try_from(index).ok())
                    .unwrap_or(0)
            }
            SelectorKind::Native(selector) => selector(count),
        }
    }

    /// The `nplurals` value declared by the rule, if any.
    pub fn nplurals(&self) -> Option<u32> {
        match &self.kind {
            SelectorKind::Rule { ast, .. } => ast.nplurals,
            SelectorKind::Native(_) => None,
        }
    }

    /// The rule expression this selector was compiled from.
    ///
    /// Returns None for native selectors.
    pub fn source(&self) -> Option<&str> {
        match &self.kind {
            SelectorKind::Rule { source, .. } => Some(source.as_ref()),
            SelectorKind::Native(_) => None,
        }
    }
}

impl Default for PluralSelector {
    /// The two-form rule `n != 1`.
    fn default() -> Self {
        let ast = PluralRuleAst {
            nplurals: Some(2),
            plural: Expr::Binary {
                op: BinaryOp::Ne,
                lhs: Box::new(Expr::Variable),
                rhs: Box::new(Expr::Number(1)),
            },
        };
        Self {
            kind: SelectorKind::Rule {
                source: Arc::from(DEFAULT_PLURAL_RULE),
                ast: Arc::new(ast),
            },
        }
    }
}

impl Debug for PluralSelector {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.kind {
            SelectorKind::Rule { source, .. } => {
                f.debug_tuple("PluralSelector").field(source).finish()
            }
            SelectorKind::Native(_) => f.write_str("PluralSelector(<native>)"),
        }
    }
}

/// How a language's plural forms are chosen at registration time.
#[derive(Debug, Clone, Default)]
pub enum PluralRule {
    /// Install [`DEFAULT_PLURAL_RULE`].
    #[default]
    Default,
    /// Compile a gettext rule expression.
    Expression(String),
    /// Use an already built selector verbatim.
    Selector(PluralSelector),
}

impl PluralRule {
    /// Produce the selector, compiling the expression if there is one.
    pub fn into_selector(self) -> Result<PluralSelector, PluralRuleError> {
        match self {
            PluralRule::Default => Ok(PluralSelector::default()),
            PluralRule::Expression(expression) => PluralSelector::compile(Some(&expression)),
            PluralRule::Selector(selector) => Ok(selector),
        }
    }
}

impl From<&str> for PluralRule {
    fn from(expression: &str) -> Self {
        PluralRule::Expression(expression.to_string())
    }
}

impl From<String> for PluralRule {
    fn from(expression: String) -> Self {
        PluralRule::Expression(expression)
    }
}

impl From<Option<&str>> for PluralRule {
    fn from(expression: Option<&str>) -> Self {
        expression.map_or(PluralRule::Default, PluralRule::from)
    }
}

impl From<PluralSelector> for PluralRule {
    fn from(selector: PluralSelector) -> Self {
        PluralRule::Selector(selector)
    }
}

/// Evaluate an expression with C integer semantics.
///
/// Comparisons and logical operators produce 1 or 0. Returns None on
/// division by zero or overflow.
fn evaluate(expr: &Expr, n: i64) -> Option<i64> {
    match expr {
        Expr::Number(value) => Some(*value),
        Expr::Variable => Some(n),
        Expr::Unary { op, operand } => {
            let value = evaluate(operand, n)?;
            match op {
                UnaryOp::Not => Some(i64::from(value == 0)),
                UnaryOp::Neg => value.checked_neg(),
            }
        }
        Expr::Binary { op, lhs, rhs } => {
            let left = evaluate(lhs, n)?;
            // Logical operators short-circuit.
            match op {
                BinaryOp::And if left == 0 => return Some(0),
                BinaryOp::Or if left != 0 => return Some(1),
                _ => {}
            }
            let right = evaluate(rhs, n)?;
            match op {
                BinaryOp::Mul => left.checked_mul(right),
                BinaryOp::Div => left.checked_div(right),
                BinaryOp::Rem => left.checked_rem(right),
                BinaryOp::Add => left.checked_add(right),
                BinaryOp::Sub => left.checked_sub(right),
                BinaryOp::Lt => Some(i64::from(left < right)),
                BinaryOp::Le => Some(i64::from(left <= right)),
                BinaryOp::Gt => Some(i64::from(left > right)),
                BinaryOp::Ge => Some(i64::from(left >= right)),
                BinaryOp::Eq => Some(i64::from(left == right)),
                BinaryOp::Ne => Some(i64::from(left != right)),
                BinaryOp::And | BinaryOp::Or => Some(i64::from(right != 0)),
            }
        }
        Expr::Conditional {
            condition,
            then,
            otherwise,
        } => {
            if evaluate(condition, n)? != 0 {
                evaluate(then, n)
            } else {
                evaluate(otherwise, n)
            }
        }
    }
}
