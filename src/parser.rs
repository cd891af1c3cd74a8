use std::mem;

use crate::{
    ast::{
        ComparisonTerm, Expression, FunctionCall, LogicalTerm, Operand, Operator, Token,
        UnaryTerm, Variable,
    },
    lexer::{LexError, Lexer},
    path::{PathError, parse_path},
};

/// Deepest allowed nesting of subexpressions and call arguments.
pub const MAX_NESTING_DEPTH: usize = 64;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error("expected {expected}, got {found:?}")]
    UnexpectedToken { expected: String, found: Token },

    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

/// Recursive-descent parser over the token stream of a single expression.
///
/// The parser holds no state beyond its position, so any number of them can
/// run side by side.
pub struct Parser {
    lexer: Lexer,
    current_token: Token,
    depth: usize,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Result<Self, ParseError> {
        let current_token = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current_token,
            depth: 0,
        })
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.current_token = self.lexer.next_token()?;
        Ok(())
    }

    fn expect(&mut self, expected: Token) -> Result<(), ParseError> {
        if !self.check(&expected) {
            return Err(ParseError::UnexpectedToken {
                expected: format!("{expected:?}"),
                found: self.current_token.clone(),
            });
        }
        self.advance()
    }

    fn check(&self, token: &Token) -> bool {
        mem::discriminant(&self.current_token) == mem::discriminant(token)
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Parse a single operand: literal, variable, regex, call or `( ... )`
    fn parse_operand(&mut self) -> Result<Operand, ParseError> {
        let operand = match mem::replace(&mut self.current_token, Token::Eof) {
            Token::Number(n) => Operand::Number(n),
            Token::String(s) => Operand::String(s),
            Token::Boolean(b) => Operand::Boolean(b),
            Token::Nil => Operand::Nil,
            Token::Regex(pattern) => Operand::Regex(pattern),
            Token::Variable(path) => {
                let segments = parse_path(&path)?;
                Operand::Variable(Variable { path, segments })
            }
            Token::Function(name) => {
                self.advance()?;
                return self.parse_call(name).map(Operand::Function);
            }
            Token::LParen => {
                self.enter()?;
                self.advance()?;
                let expr = self.parse_expression()?;
                self.expect(Token::RParen)?;
                self.leave();
                return Ok(Operand::Subexpression(Box::new(expr)));
            }
            found => {
                return Err(ParseError::UnexpectedToken {
                    expected: "a value".to_string(),
                    found,
                });
            }
        };
        self.advance()?;
        Ok(operand)
    }

    fn parse_call(&mut self, name: String) -> Result<FunctionCall, ParseError> {
        self.expect(Token::LParen)?;
        self.enter()?;

        let mut args = vec![];
        if !self.check(&Token::RParen) {
            loop {
                args.push(self.parse_expression()?);
                if self.check(&Token::Comma) {
                    self.advance()?;
                } else {
                    break;
                }
            }
        }

        self.expect(Token::RParen)?;
        self.leave();
        Ok(FunctionCall { name, args })
    }

    fn parse_unary(&mut self) -> Result<UnaryTerm, ParseError> {
        let operator = if self.check(&Token::Exclamation) {
            self.advance()?;
            Some(Operator::Not)
        } else {
            None
        };

        let operand = self.parse_operand()?;
        Ok(UnaryTerm { operator, operand })
    }

    fn parse_comparison(&mut self) -> Result<ComparisonTerm, ParseError> {
        let left = self.parse_unary()?;
        let mut right = vec![];

        while let Some(op) =
            Operator::from_token(&self.current_token).filter(|op| op.is_comparison())
        {
            self.advance()?;
            right.push((op, self.parse_unary()?));
        }

        Ok(ComparisonTerm { left, right })
    }

    pub fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        let left = self.parse_comparison()?;
        let mut right = vec![];

        while let Some(operator) =
            Operator::from_token(&self.current_token).filter(|op| op.is_logical())
        {
            self.advance()?;
            right.push(LogicalTerm {
                operator,
                term: self.parse_comparison()?,
            });
        }

        Ok(Expression { left, right })
    }

    /// Parse a complete expression; the whole input must be consumed.
    pub fn parse(&mut self) -> Result<Expression, ParseError> {
        let expr = self.parse_expression()?;
        self.expect(Token::Eof)?;
        Ok(expr)
    }
}
