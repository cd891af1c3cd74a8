//! An embeddable predicate expression language.
//!
//! Hosts hand the engine a short boolean expression and a data graph:
//!
//! ```
//! use predicate_lang::{Context, Data, evaluate};
//! use serde_json::json;
//!
//! let data = Data::from(json!({"foo": [1, 2, 3], "bar": {"status": "ok"}}));
//! let ctx = Context::new(data).unwrap();
//!
//! assert!(evaluate(&ctx, r#"@len($foo) < 10 && $bar.status == "ok""#).unwrap());
//! ```
pub mod ast;
pub mod builtins;
#[cfg(feature = "cli")]
pub mod cli;
pub mod context;
pub mod data;
pub mod error;
pub mod evaluator;
pub mod function;
pub mod lexer;
pub mod parser;
pub mod path;
pub mod predicate;
pub mod value;

pub use ast::{Expression, Operator, Token};
pub use context::{Context, ContextBuilder};
pub use data::Data;
pub use error::{Error, ErrorKind, Result};
pub use evaluator::Evaluate;
pub use function::{FunctionTable, NativeFunction};
pub use lexer::{LexError, Lexer, Position};
pub use parser::{ParseError, Parser};
pub use predicate::{PreparedExpression, evaluate, evaluate_data, parse, prepare};
pub use value::Value;
