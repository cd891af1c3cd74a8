use std::sync::Arc;

use crate::{
    data::Data,
    error::Result,
    function::{FunctionTable, NativeFunction},
};

/// Data plus the functions an expression may call.
///
/// Contexts are cheap to clone; the builtin table is shared.
#[derive(Debug, Clone)]
pub struct Context {
    data: Data,
    functions: Arc<FunctionTable>,
}

impl Context {
    /// Creates a context with the builtin functions only.
    ///
    /// # Examples
    ///
    /// ```
    /// use predicate_lang::{Context, Data};
    ///
    /// let ctx = Context::new(Data::Integer(5)).unwrap();
    /// assert_eq!(ctx.data(), &Data::Integer(5));
    /// ```
    pub fn new(data: impl Into<Data>) -> Result<Self> {
        let data = data.into();
        data.validate()?;
        Ok(Context {
            data,
            functions: FunctionTable::builtins(),
        })
    }

    /// Starts a context that also carries host functions.
    pub fn builder(data: impl Into<Data>) -> ContextBuilder {
        ContextBuilder {
            data: data.into(),
            registrations: Vec::new(),
        }
    }

    /// The data root `$` refers to.
    pub fn data(&self) -> &Data {
        &self.data
    }

    pub fn function(&self, name: &str) -> Option<&NativeFunction> {
        self.functions.get(name)
    }

    pub fn functions(&self) -> &FunctionTable {
        &self.functions
    }
}

/// Collects function registrations for a [`Context`].
///
/// Registrations are checked in order by [`ContextBuilder::build`]; the first
/// invalid or duplicate name fails the whole build.
///
/// # Examples
///
/// ```
/// use predicate_lang::{Context, Data, Error};
///
/// let ctx = Context::builder(Data::Integer(-10))
///     .register("@abs", |args: &[Data]| match args {
///         [n] => Ok(n.as_f64().map(f64::abs).into()),
///         _ => Err(Error::function("@abs takes one argument")),
///     })
///     .build()
///     .unwrap();
///
/// assert!(predicate_lang::evaluate(&ctx, "@abs($) > 9").unwrap());
/// ```
pub struct ContextBuilder {
    data: Data,
    registrations: Vec<(String, NativeFunction)>,
}

impl ContextBuilder {
    /// Registers `function` under `name`, which must look like `@name`.
    pub fn register<F>(mut self, name: impl Into<String>, function: F) -> Self
    where
        F: Fn(&[Data]) -> Result<Data> + Send + Sync + 'static,
    {
        let function: NativeFunction = Arc::new(function);
        self.registrations.push((name.into(), function));
        self
    }

    pub fn build(self) -> Result<Context> {
        self.data.validate()?;

        let functions = if self.registrations.is_empty() {
            FunctionTable::builtins()
        } else {
            let mut table = (*FunctionTable::builtins()).clone();
            for (name, function) in self.registrations {
                table.register(&name, function)?;
            }
            Arc::new(table)
        };

        Ok(Context {
            data: self.data,
            functions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_builder_without_functions_shares_builtins() {
        let ctx = Context::builder(Data::Nil).build().unwrap();
        assert!(ctx.functions().contains("@len"));
    }

    #[test]
    fn test_duplicate_registration() {
        let err = Context::builder(Data::Nil)
            .register("@twice", |_: &[Data]| Ok(Data::Nil))
            .register("@twice", |_: &[Data]| Ok(Data::Nil))
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateFunction);
    }

    #[test]
    fn test_invalid_data_rejected() {
        let data = Data::Array(vec![Data::Array(vec![])]);
        assert_eq!(
            Context::new(data).unwrap_err().kind(),
            ErrorKind::UnsupportedType
        );
    }
}
