use crate::{ast::Operator, path::PathSegment};

/// Root of a parsed predicate: comparison terms joined by `&&` / `||`.
///
/// Logical operators share one precedence level and fold strictly left to
/// right, so `a || b && c` is `(a || b) && c`.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub left: ComparisonTerm,
    pub right: Vec<LogicalTerm>,
}

/// A logical operator followed by its right-hand comparison term.
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalTerm {
    pub operator: Operator,
    pub term: ComparisonTerm,
}

/// Unary terms joined by comparison operators, folded left to right.
///
/// # Example
/// ```text
/// 1 < $x == true      // (1 < $x) == true
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTerm {
    pub left: UnaryTerm,
    pub right: Vec<(Operator, UnaryTerm)>,
}

/// An operand with an optional leading `!`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryTerm {
    pub operator: Option<Operator>,
    pub operand: Operand,
}

/// Value node of the tree.
///
/// These are the parse-time forms of a value; evaluation reduces every one of
/// them to a concrete [`crate::Value`].
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Numeric literal
    Number(f64),

    /// String literal
    String(String),

    /// Boolean literal
    Boolean(bool),

    /// `nil` literal
    Nil,

    /// Regex literal (`/pattern/`), only meaningful as a `@match` argument
    Regex(String),

    /// Variable reference (`$path`)
    Variable(Variable),

    /// Function call (`@name(args...)`)
    Function(FunctionCall),

    /// Parenthesized expression
    Subexpression(Box<Expression>),
}

/// A `$` reference into the context data.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// Path text with the sigil stripped
    pub path: String,
    /// Segments parsed from `path`; empty for the bare `$` root
    pub segments: Vec<PathSegment>,
}

/// A call to a builtin or host-registered function.
///
/// Names are resolved at evaluation time against the context's function
/// table, so an unknown name parses fine and fails when evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    /// Function name including the `@` sigil
    pub name: String,
    pub args: Vec<Expression>,
}
