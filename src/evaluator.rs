//! Tree-walking evaluation of parsed expressions.
//!
//! Every node implements [`Evaluate`]. Evaluation only reads the tree and the
//! context, so one tree can be evaluated from many threads at once.

use crate::{
    ast::{ComparisonTerm, Expression, FunctionCall, Operand, Operator, UnaryTerm, Variable},
    context::Context,
    data::Data,
    error::{Error, Result},
    path,
    value::Value,
};

/// Reduces a tree node to a [`Value`] against a context.
pub trait Evaluate {
    fn eval(&self, ctx: &Context) -> Result<Value>;
}

impl Evaluate for Expression {
    fn eval(&self, ctx: &Context) -> Result<Value> {
        let mut acc = self.left.eval(ctx)?;

        for term in &self.right {
            acc = match (term.operator, &acc) {
                // short circuit: right side is never evaluated
                (Operator::And, Value::Bool(false)) => Value::Bool(false),
                (Operator::Or, Value::Bool(true)) => Value::Bool(true),
                (op, _) => {
                    let rhs = term.term.eval(ctx)?;
                    apply_logical(op, &acc, &rhs)?
                }
            };
        }

        Ok(acc)
    }
}

impl Evaluate for ComparisonTerm {
    fn eval(&self, ctx: &Context) -> Result<Value> {
        let mut acc = self.left.eval(ctx)?;

        for (op, term) in &self.right {
            let rhs = term.eval(ctx)?;
            acc = apply_comparison(*op, &acc, &rhs)?;
        }

        Ok(acc)
    }
}

impl Evaluate for UnaryTerm {
    fn eval(&self, ctx: &Context) -> Result<Value> {
        let value = self.operand.eval(ctx)?;
        match self.operator {
            Some(op) => apply_unary(op, &value),
            None => Ok(value),
        }
    }
}

impl Evaluate for Operand {
    fn eval(&self, ctx: &Context) -> Result<Value> {
        match self {
            Operand::Number(n) => Ok(Value::Number(*n)),
            Operand::String(s) => Ok(Value::String(s.clone())),
            Operand::Boolean(b) => Ok(Value::Bool(*b)),
            Operand::Nil => Ok(Value::Nil),
            // patterns are compiled by @match, not here
            Operand::Regex(pattern) => Ok(Value::String(pattern.clone())),
            Operand::Variable(variable) => variable.eval(ctx),
            Operand::Function(call) => call.eval(ctx),
            Operand::Subexpression(expr) => expr.eval(ctx),
        }
    }
}

impl Evaluate for Variable {
    fn eval(&self, ctx: &Context) -> Result<Value> {
        path::resolve(&self.segments, ctx.data()).map(Value::from)
    }
}

impl Evaluate for FunctionCall {
    fn eval(&self, ctx: &Context) -> Result<Value> {
        let function = ctx
            .function(&self.name)
            .ok_or_else(|| Error::InvalidFunction(format!("unknown function {}", self.name)))?;

        let args = self
            .args
            .iter()
            .map(|arg| arg.eval(ctx).map(Data::from))
            .collect::<Result<Vec<_>>>()?;

        log::trace!("calling {} with {} argument(s)", self.name, args.len());
        function(&args).map(Value::from)
    }
}

fn type_mismatch(op: Operator, left: &Value, right: &Value) -> Error {
    Error::TypeMismatch(format!(
        "cannot apply {op} to {} and {}",
        left.type_name(),
        right.type_name()
    ))
}

/// Applies `!`; the operand must be a bool.
pub fn apply_unary(op: Operator, value: &Value) -> Result<Value> {
    match (op, value) {
        (Operator::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        (Operator::Not, other) => Err(Error::TypeMismatch(format!(
            "cannot apply ! to {}",
            other.type_name()
        ))),
        (op, _) => Err(Error::UnsupportedOperator(op.to_string())),
    }
}

/// Applies a comparison operator.
///
/// Ordering needs two numbers or two strings. Equality additionally accepts
/// two bools, and once either side is nil it compares nilness only.
pub fn apply_comparison(op: Operator, left: &Value, right: &Value) -> Result<Value> {
    let result = match op {
        Operator::Equal | Operator::NotEqual => {
            let equal = match (left, right) {
                (Value::Number(a), Value::Number(b)) => a == b,
                (Value::String(a), Value::String(b)) => a == b,
                (Value::Bool(a), Value::Bool(b)) => a == b,
                (l, r) if l.is_nil() || r.is_nil() => l.is_nil() == r.is_nil(),
                (l, r) => return Err(type_mismatch(op, l, r)),
            };
            if op == Operator::Equal { equal } else { !equal }
        }
        Operator::LessThan | Operator::LessEqual | Operator::GreaterThan | Operator::GreaterEqual => {
            let ordering = match (left, right) {
                (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
                (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
                (l, r) => return Err(type_mismatch(op, l, r)),
            };
            let Some(ordering) = ordering else {
                return Ok(Value::Bool(false));
            };
            match op {
                Operator::LessThan => ordering.is_lt(),
                Operator::LessEqual => ordering.is_le(),
                Operator::GreaterThan => ordering.is_gt(),
                _ => ordering.is_ge(),
            }
        }
        op => return Err(Error::UnsupportedOperator(op.to_string())),
    };
    Ok(Value::Bool(result))
}

/// Applies `&&` / `||` to two already-evaluated operands.
pub fn apply_logical(op: Operator, left: &Value, right: &Value) -> Result<Value> {
    match (op, left, right) {
        (Operator::And, Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(*a && *b)),
        (Operator::Or, Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(*a || *b)),
        (Operator::And | Operator::Or, l, r) => Err(type_mismatch(op, l, r)),
        (op, _, _) => Err(Error::UnsupportedOperator(op.to_string())),
    }
}
