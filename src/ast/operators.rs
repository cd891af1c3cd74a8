use std::fmt;

use crate::ast::Token;

/// Operators of the predicate language.
///
/// `!` is the only unary operator. Comparison and logical operators are both
/// binary and fold left to right within their own grammar level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    // Unary
    /// Logical not (`!`)
    Not,

    // Comparison
    /// Less than (`<`)
    LessThan,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    GreaterThan,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal (`==`)
    Equal,
    /// Not equal (`!=`)
    NotEqual,

    // Logical
    /// Logical AND (`&&`)
    And,
    /// Logical OR (`||`)
    Or,
}

impl Operator {
    /// Maps an operator token to its operator, `None` for anything else.
    pub fn from_token(token: &Token) -> Option<Operator> {
        let op = match token {
            Token::Exclamation => Operator::Not,
            Token::Lt => Operator::LessThan,
            Token::LtEq => Operator::LessEqual,
            Token::Gt => Operator::GreaterThan,
            Token::GtEq => Operator::GreaterEqual,
            Token::EqEq => Operator::Equal,
            Token::NotEq => Operator::NotEqual,
            Token::And => Operator::And,
            Token::Or => Operator::Or,
            _ => return None,
        };
        Some(op)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Not => "!",
            Operator::LessThan => "<",
            Operator::LessEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterEqual => ">=",
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::And => "&&",
            Operator::Or => "||",
        }
    }

    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            Operator::LessThan
                | Operator::LessEqual
                | Operator::GreaterThan
                | Operator::GreaterEqual
                | Operator::Equal
                | Operator::NotEqual
        )
    }

    pub fn is_logical(self) -> bool {
        matches!(self, Operator::And | Operator::Or)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
