//! Evaluate predicates against JSON input

use super::CliError;
use crate::{Context, Data, Value, predicate};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The predicate expression to evaluate
    pub expression: String,
    /// JSON input string; evaluated against `nil` when absent
    pub input: Option<String>,
    /// Only validate syntax, don't evaluate
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug, Clone, PartialEq)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Expression evaluated to this value
    Evaluated(Value),
}

/// Execute a check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let expression = predicate::prepare(&options.expression)?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }

    let data = match &options.input {
        Some(json) => Data::from(serde_json::from_str::<serde_json::Value>(json)?),
        None => Data::Nil,
    };

    let ctx = Context::new(data)?;
    let value = expression.evaluate_value(&ctx)?;
    Ok(CheckResult::Evaluated(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(expression: &str, input: Option<&str>) -> Result<CheckResult, CliError> {
        execute_check(&CheckOptions {
            expression: expression.to_string(),
            input: input.map(str::to_string),
            syntax_only: false,
        })
    }

    #[test]
    fn test_check_against_json() {
        let result = check("$status == \"ok\"", Some(r#"{"status": "ok"}"#)).unwrap();
        assert_eq!(result, CheckResult::Evaluated(Value::Bool(true)));
    }

    #[test]
    fn test_check_without_input_uses_nil() {
        let result = check("$ == nil", None).unwrap();
        assert_eq!(result, CheckResult::Evaluated(Value::Bool(true)));
    }

    #[test]
    fn test_syntax_only_skips_evaluation() {
        let result = execute_check(&CheckOptions {
            expression: "@unknown($x)".to_string(),
            input: None,
            syntax_only: true,
        })
        .unwrap();
        assert_eq!(result, CheckResult::SyntaxValid);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            check("true", Some("{not json")),
            Err(CliError::Json(_))
        ));
    }
}
