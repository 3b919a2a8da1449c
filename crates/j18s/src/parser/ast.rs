//! Public AST types for plural rules and placeholder templates.
//!
//! These types are public to enable external tooling (the CLI, linters, etc.).

/// A parsed gettext plural rule: `nplurals=N; plural=EXPR`.
#[derive(Debug, Clone, PartialEq)]
pub struct PluralRuleAst {
    /// Declared number of plural forms, if the rule has an `nplurals` clause.
    pub nplurals: Option<u32>,
    /// The expression computing the form index from `n`.
    pub plural: Expr,
}

/// An integer expression over the single variable `n`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Integer literal.
    Number(i64),
    /// The count variable `n`.
    Variable,
    /// `!e` or `-e`.
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// `lhs op rhs`.
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// `condition ? then : otherwise`
    Conditional {
        condition: Box<Expr>,
        then: Box<Expr>,
        otherwise: Box<Expr>,
    },
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Neg,
}

/// Infix operators, in C precedence groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Mul,
    Div,
    Rem,
    Add,
    Sub,
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
    And,
    Or,
}

/// A parsed placeholder template.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Template {
    pub segments: Vec<Segment>,
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text, copied as is.
    Literal(String),
    /// `%N$s` or `%N$d`. `raw` is the placeholder as written, kept so an
    /// unmatched placeholder can be emitted verbatim.
    Positional { position: usize, raw: String },
    /// Bare `%s` or `%d`, filled from the next unconsumed argument.
    Sequential { raw: String },
}
