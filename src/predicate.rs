//! Entry points: one-shot evaluation and prepared expressions.

use std::str::FromStr;

use crate::{
    ast::Expression,
    context::Context,
    data::Data,
    error::{Error, Result},
    evaluator::Evaluate,
    lexer::Lexer,
    parser::Parser,
    value::Value,
};

/// Parses an expression into its tree without evaluating it.
pub fn parse(expression: &str) -> Result<Expression> {
    let lexer = Lexer::new(expression);
    let mut parser = Parser::new(lexer)?;
    Ok(parser.parse()?)
}

/// Parses and evaluates a predicate against a context in one call.
///
/// # Examples
///
/// ```
/// use predicate_lang::{Context, Data, evaluate};
/// use serde_json::json;
///
/// let ctx = Context::new(Data::from(json!({"foo": {"value": 4}}))).unwrap();
/// assert!(evaluate(&ctx, "1 < $foo.value").unwrap());
/// ```
pub fn evaluate(ctx: &Context, expression: &str) -> Result<bool> {
    let tree = parse(expression)?;
    expect_bool(tree.eval(ctx)?)
}

/// Evaluates a predicate against `data` with only the builtin functions.
pub fn evaluate_data(data: impl Into<Data>, expression: &str) -> Result<bool> {
    let ctx = Context::new(data)?;
    evaluate(&ctx, expression)
}

/// Parses an expression once for repeated evaluation.
pub fn prepare(expression: &str) -> Result<PreparedExpression> {
    let tree = parse(expression)?;
    log::debug!("prepared expression {expression:?}");
    Ok(PreparedExpression {
        source: expression.to_string(),
        tree,
    })
}

/// A parsed expression that can be evaluated against many contexts.
///
/// The tree is never mutated after parsing, so a prepared expression can be
/// shared across threads and evaluated concurrently without locking.
///
/// # Examples
///
/// ```
/// use predicate_lang::{Context, Data, prepare};
///
/// let expr = prepare("$ < 3").unwrap();
/// for (n, expected) in [(2, true), (5, false)] {
///     let ctx = Context::new(Data::Integer(n)).unwrap();
///     assert_eq!(expr.evaluate(&ctx).unwrap(), expected);
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedExpression {
    source: String,
    tree: Expression,
}

impl PreparedExpression {
    /// Evaluates the predicate; the result must be a bool.
    pub fn evaluate(&self, ctx: &Context) -> Result<bool> {
        expect_bool(self.tree.eval(ctx)?)
    }

    /// Evaluates to whatever value the expression produces.
    pub fn evaluate_value(&self, ctx: &Context) -> Result<Value> {
        self.tree.eval(ctx)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tree(&self) -> &Expression {
        &self.tree
    }
}

impl FromStr for PreparedExpression {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        prepare(s)
    }
}

fn expect_bool(value: Value) -> Result<bool> {
    match value {
        Value::Bool(b) => Ok(b),
        other => Err(Error::TypeMismatch(format!(
            "expression produced {}, expected bool",
            other.type_name()
        ))),
    }
}
