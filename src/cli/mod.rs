//! CLI support for predicate-lang
//!
//! Provides programmatic access to the `predicate` binary's functionality for
//! embedding in other tools.

mod check;

pub use check::{CheckOptions, CheckResult, execute_check};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Predicate(#[from] crate::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to render result: {0}")]
    Output(serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
