//! Function table: builtins plus host-registered callables.

use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, OnceLock},
};

use crate::{
    builtins,
    data::Data,
    error::{Error, Result},
    lexer::is_identifier_char,
};

/// A callable invoked as `@name(args...)`.
///
/// Arguments arrive already evaluated and converted to [`Data`]; numbers are
/// always `Data::Float`. Whatever the callable returns, value or error, is
/// handed back to the expression unchanged.
pub type NativeFunction = Arc<dyn Fn(&[Data]) -> Result<Data> + Send + Sync>;

/// Mapping of `@`-prefixed names to callables.
#[derive(Clone, Default)]
pub struct FunctionTable {
    functions: HashMap<String, NativeFunction>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared table holding `@len`, `@select`, `@array`, `@in`, `@has`
    /// and `@match`.
    pub fn builtins() -> Arc<FunctionTable> {
        static BUILTINS: OnceLock<Arc<FunctionTable>> = OnceLock::new();
        BUILTINS
            .get_or_init(|| {
                let mut table = FunctionTable::new();
                let entries: [(&str, fn(&[Data]) -> Result<Data>); 6] = [
                    ("@len", builtins::len),
                    ("@select", builtins::select),
                    ("@array", builtins::array),
                    ("@in", builtins::contains),
                    ("@has", builtins::has),
                    ("@match", builtins::matches),
                ];
                for (name, function) in entries {
                    table.functions.insert(name.to_string(), Arc::new(function));
                }
                Arc::new(table)
            })
            .clone()
    }

    /// Adds a function under `name`.
    ///
    /// The name must be `@` followed by word characters, and must not already
    /// be present. Builtins cannot be replaced.
    pub fn register(&mut self, name: &str, function: NativeFunction) -> Result<()> {
        if !is_valid_function_name(name) {
            return Err(Error::InvalidFunction(format!(
                "{name:?} is not a valid function name"
            )));
        }
        if self.functions.contains_key(name) {
            return Err(Error::DuplicateFunction(name.to_string()));
        }
        self.functions.insert(name.to_string(), function);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&NativeFunction> {
        self.functions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for FunctionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

/// `@` followed by one or more letters, digits or underscores.
pub fn is_valid_function_name(name: &str) -> bool {
    name.strip_prefix('@')
        .is_some_and(|rest| !rest.is_empty() && rest.chars().all(is_identifier_char))
}
