//! Builtin functions available in every context.
//!
//! | Call | Result |
//! |---|---|
//! | `@len(arr)` | element count |
//! | `@select(arr, "expr")` | elements for which `expr` is true, `$` bound to the element |
//! | `@array(v1, ..., vN)` | the arguments as an array |
//! | `@in(arr, v)` | whether some element equals `v` |
//! | `@has(obj, "field")` | whether the key is present, even if nil |
//! | `@match(str, /re/)` | whether the string matches the pattern |

use regex::Regex;

use crate::{
    context::Context,
    data::Data,
    error::{Error, Result},
    evaluator::Evaluate,
    predicate,
    value::Value,
};

fn expect_arity(name: &str, args: &[Data], expected: usize) -> Result<()> {
    if args.len() != expected {
        return Err(Error::arity(name, expected, args.len()));
    }
    Ok(())
}

fn expect_array<'a>(name: &str, position: &str, arg: &'a Data) -> Result<&'a [Data]> {
    match arg {
        Data::Array(items) => Ok(items),
        other => Err(Error::TypeMismatch(format!(
            "{name} expects an array as {position} argument, got {}",
            other.type_name()
        ))),
    }
}

fn expect_string<'a>(name: &str, position: &str, arg: &'a Data) -> Result<&'a str> {
    arg.as_str().ok_or_else(|| {
        Error::TypeMismatch(format!(
            "{name} expects a string as {position} argument, got {}",
            arg.type_name()
        ))
    })
}

/// `@len(arr)`
pub fn len(args: &[Data]) -> Result<Data> {
    expect_arity("@len", args, 1)?;
    let items = expect_array("@len", "first", &args[0])?;
    let count = i64::try_from(items.len())
        .map_err(|_| Error::Unexpected(format!("array of {} elements", items.len())))?;
    Ok(Data::Integer(count))
}

/// `@select(arr, "expr")`
///
/// The expression is parsed once per call and evaluated against a fresh
/// context per element, holding only that element and the builtins.
pub fn select(args: &[Data]) -> Result<Data> {
    expect_arity("@select", args, 2)?;
    let items = expect_array("@select", "first", &args[0])?;
    let source = expect_string("@select", "second", &args[1])?;

    let tree = predicate::parse(source)?;

    let mut selected = Vec::new();
    for item in items {
        let ctx = Context::new(item.clone())?;
        match tree.eval(&ctx)? {
            Value::Bool(true) => selected.push(item.clone()),
            Value::Bool(false) => {}
            other => {
                return Err(Error::TypeMismatch(format!(
                    "@select predicate {source:?} returned {}, expected bool",
                    other.type_name()
                )));
            }
        }
    }

    log::trace!("@select kept {} of {} element(s)", selected.len(), items.len());
    Ok(Data::Array(selected))
}

/// `@array(v1, ..., vN)`
pub fn array(args: &[Data]) -> Result<Data> {
    Ok(Data::Array(args.to_vec()))
}

/// `@in(arr, v)`
pub fn contains(args: &[Data]) -> Result<Data> {
    expect_arity("@in", args, 2)?;
    let items = expect_array("@in", "first", &args[0])?;

    for item in items {
        if scalar_equal(item, &args[1])? {
            return Ok(Data::Bool(true));
        }
    }
    Ok(Data::Bool(false))
}

/// Type-matched equality used by `@in`; mixing types is an error, not `false`.
fn scalar_equal(left: &Data, right: &Data) -> Result<bool> {
    use Data::*;
    match (left, right) {
        (Integer(_) | Float(_), Integer(_) | Float(_)) => Ok(left.as_f64() == right.as_f64()),
        (String(a), String(b)) => Ok(a == b),
        (Bool(a), Bool(b)) => Ok(a == b),
        (Integer(_) | Float(_) | String(_) | Bool(_), _) => Err(Error::TypeMismatch(format!(
            "@in cannot compare {} with {}",
            left.type_name(),
            right.type_name()
        ))),
        _ => Err(Error::UnsupportedType(format!(
            "@in does not support {} elements",
            left.type_name()
        ))),
    }
}

/// `@has(obj, "field")`
pub fn has(args: &[Data]) -> Result<Data> {
    expect_arity("@has", args, 2)?;
    let Data::Object(map) = &args[0] else {
        return Err(Error::TypeMismatch(format!(
            "@has expects an object as first argument, got {}",
            args[0].type_name()
        )));
    };
    let key = expect_string("@has", "second", &args[1])?;
    Ok(Data::Bool(map.contains_key(key)))
}

/// `@match(str, /re/)`
pub fn matches(args: &[Data]) -> Result<Data> {
    expect_arity("@match", args, 2)?;
    let text = expect_string("@match", "first", &args[0])?;
    let pattern = expect_string("@match", "second", &args[1])?;

    let re = Regex::new(pattern)?;
    Ok(Data::Bool(re.is_match(text)))
}
