//! # Predicate Language - Abstract Syntax Tree
//!
//! This module defines the Abstract Syntax Tree (AST) for the predicate
//! language, a small boolean expression language evaluated against host data.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[expressions]** - Tree nodes (expression, logical/comparison/unary terms, operands)
//! - **[operators]** - Unary, comparison and logical operators
//!
//! ## Quick Start
//!
//! ```text
//! @len($items) < 10 && $status == "ok"
//! ```
//!
//! ## Grammar
//!
//! ```text
//! Expression      := ComparisonTerm (LogicalOp ComparisonTerm)*
//! ComparisonTerm  := UnaryTerm (ComparisonOp UnaryTerm)*
//! UnaryTerm       := ['!'] Operand
//! Operand         := Number | String | Bool | "nil" | Variable | Regex
//!                  | Function | '(' Expression ')'
//! Function        := '@'Name '(' [Expression (',' Expression)*] ')'
//! ```
//!
//! Comparison binds tighter than logic. Within a level operators fold left to
//! right; `&&` and `||` have the same precedence. Parentheses are the only way
//! to regroup.
//!
//! ## Examples
//!
//! ### Path Access
//!
//! ```text
//! $foo.bar == 3
//! $foo["hyphen-key"] != nil
//! $items[1].price >= 10.5
//! ```
//!
//! ### Functions
//!
//! ```text
//! @in(@array(1, 2, 3), $x)
//! @len(@select($items, "$status == \"ok\"")) > 2
//! @match($ip, /^10\./)
//! ```
pub mod expressions;
pub mod operators;
pub mod tokens;

pub use expressions::{
    ComparisonTerm, Expression, FunctionCall, LogicalTerm, Operand, UnaryTerm, Variable,
};
pub use operators::Operator;
pub use tokens::Token;
