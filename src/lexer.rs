use std::fmt;

use crate::ast::Token;

/// Character offset into the source expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "position {}", self.offset)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexError {
    #[error("unexpected character '{ch}' at {position}")]
    UnexpectedChar { ch: char, position: Position },

    #[error("unexpected '{ch}' at {position} (did you mean '{suggestion}'?)")]
    IncompleteOperator {
        ch: char,
        suggestion: &'static str,
        position: Position,
    },

    #[error("unknown keyword '{word}' at {position}")]
    UnknownKeyword { word: String, position: Position },

    #[error("invalid escape sequence '\\{ch}' at {position}")]
    InvalidEscape { ch: char, position: Position },

    #[error("unterminated string starting at {0}")]
    UnterminatedString(Position),

    #[error("unterminated regular expression starting at {0}")]
    UnterminatedRegex(Position),

    #[error("unterminated index in variable starting at {0}")]
    UnterminatedIndex(Position),

    #[error("expected function name after '@' at {0}")]
    MissingFunctionName(Position),

    #[error("invalid number '{text}' at {position}")]
    InvalidNumber { text: String, position: Position },
}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn here(&self) -> Position {
        Position {
            offset: self.position,
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if is_identifier_char(ch) {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn read_string(&mut self) -> Result<String, LexError> {
        let start = self.here();
        let mut result = String::new();
        self.advance(); // opening quote

        while let Some(ch) = self.current_char() {
            match ch {
                '"' => {
                    self.advance();
                    return Ok(result);
                }
                '\\' => {
                    self.advance();
                    match self.current_char() {
                        Some('n') => result.push('\n'),
                        Some('t') => result.push('\t'),
                        Some('r') => result.push('\r'),
                        Some('"') => result.push('"'),
                        Some('\\') => result.push('\\'),
                        Some(ch) => {
                            return Err(LexError::InvalidEscape {
                                ch,
                                position: self.here(),
                            });
                        }
                        None => return Err(LexError::UnterminatedString(start)),
                    }
                    self.advance();
                }
                _ => {
                    result.push(ch);
                    self.advance();
                }
            }
        }

        Err(LexError::UnterminatedString(start))
    }

    fn read_regex(&mut self) -> Result<String, LexError> {
        let start = self.here();
        let mut pattern = String::new();
        self.advance(); // opening slash

        while let Some(ch) = self.current_char() {
            match ch {
                '/' => {
                    self.advance();
                    return Ok(pattern);
                }
                '\\' if self.peek_char(1) == Some('/') => {
                    pattern.push('/');
                    self.advance();
                    self.advance();
                }
                _ => {
                    pattern.push(ch);
                    self.advance();
                }
            }
        }

        Err(LexError::UnterminatedRegex(start))
    }

    /// Reads the path after `$`: word characters, `-`, `.`, and bracketed
    /// indexes. Bracket contents are taken verbatim and checked by the parser.
    fn read_variable(&mut self) -> Result<String, LexError> {
        let start = self.here();
        self.advance(); // sigil
        let mut path = String::new();

        while let Some(ch) = self.current_char() {
            match ch {
                c if is_identifier_char(c) || c == '-' || c == '.' => {
                    path.push(c);
                    self.advance();
                }
                '[' => self.read_index(&mut path, start)?,
                _ => break,
            }
        }

        Ok(path)
    }

    fn read_index(&mut self, path: &mut String, start: Position) -> Result<(), LexError> {
        let mut in_quotes = false;
        while let Some(ch) = self.current_char() {
            path.push(ch);
            self.advance();
            match ch {
                '"' => in_quotes = !in_quotes,
                ']' if !in_quotes => return Ok(()),
                _ => {}
            }
        }
        Err(LexError::UnterminatedIndex(start))
    }

    fn read_number(&mut self) -> Result<Token, LexError> {
        let start = self.here();
        let mut number = String::new();

        if let Some(sign @ ('+' | '-')) = self.current_char() {
            number.push(sign);
            self.advance();
        }

        let mut seen_dot = false;
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else if ch == '.'
                && !seen_dot
                && self.peek_char(1).is_some_and(|c| c.is_ascii_digit())
            {
                seen_dot = true;
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        number
            .parse::<f64>()
            .map(Token::Number)
            .map_err(|_| LexError::InvalidNumber {
                text: number,
                position: start,
            })
    }

    /// A sign or dot only starts a number when a digit follows.
    fn starts_number(&self) -> bool {
        let digit_at = |offset| self.peek_char(offset).is_some_and(|c: char| c.is_ascii_digit());
        match self.current_char() {
            Some(c) if c.is_ascii_digit() => true,
            Some('.') => digit_at(1),
            Some('+' | '-') => digit_at(1) || (self.peek_char(1) == Some('.') && digit_at(2)),
            _ => false,
        }
    }

    fn two_char(&mut self, second: char, double: Token, single: Token) -> Token {
        if self.peek_char(1) == Some(second) {
            self.advance();
            self.advance();
            double
        } else {
            self.advance();
            single
        }
    }

    fn require_pair(&mut self, ch: char, token: Token) -> Result<Token, LexError> {
        if self.peek_char(1) == Some(ch) {
            self.advance();
            self.advance();
            Ok(token)
        } else {
            Err(LexError::IncompleteOperator {
                ch,
                suggestion: token.symbol().unwrap_or_default(),
                position: self.here(),
            })
        }
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        if self.starts_number() {
            return self.read_number();
        }

        match self.current_char() {
            None => Ok(Token::Eof),
            Some('$') => self.read_variable().map(Token::Variable),
            Some('@') => {
                let position = self.here();
                self.advance();
                let name = self.read_identifier();
                if name.is_empty() {
                    return Err(LexError::MissingFunctionName(position));
                }
                Ok(Token::Function(format!("@{name}")))
            }
            Some('"') => self.read_string().map(Token::String),
            Some('/') => self.read_regex().map(Token::Regex),
            Some('(') => {
                self.advance();
                Ok(Token::LParen)
            }
            Some(')') => {
                self.advance();
                Ok(Token::RParen)
            }
            Some(',') => {
                self.advance();
                Ok(Token::Comma)
            }
            Some('!') => Ok(self.two_char('=', Token::NotEq, Token::Exclamation)),
            Some('<') => Ok(self.two_char('=', Token::LtEq, Token::Lt)),
            Some('>') => Ok(self.two_char('=', Token::GtEq, Token::Gt)),
            Some('=') => self.require_pair('=', Token::EqEq),
            Some('&') => self.require_pair('&', Token::And),
            Some('|') => self.require_pair('|', Token::Or),
            Some(ch) if ch.is_alphabetic() || ch == '_' => {
                let position = self.here();
                let word = self.read_identifier();

                match word.to_ascii_lowercase().as_str() {
                    "true" => Ok(Token::Boolean(true)),
                    "false" => Ok(Token::Boolean(false)),
                    "nil" => Ok(Token::Nil),
                    _ => Err(LexError::UnknownKeyword { word, position }),
                }
            }
            Some(ch) => Err(LexError::UnexpectedChar {
                ch,
                position: self.here(),
            }),
        }
    }
}

pub(crate) fn is_identifier_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

#[test]
fn test_keywords() {
    let mut lexer = Lexer::new("true false nil TRUE");
    assert_eq!(lexer.next_token().unwrap(), Token::Boolean(true));
    assert_eq!(lexer.next_token().unwrap(), Token::Boolean(false));
    assert_eq!(lexer.next_token().unwrap(), Token::Nil);
    assert_eq!(lexer.next_token().unwrap(), Token::Boolean(true));
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}

#[test]
fn test_predicate() {
    let mut lexer = Lexer::new("@len($foo) < 10 && $bar.status == \"ok\"");
    assert_eq!(lexer.next_token().unwrap(), Token::Function("@len".to_string()));
    assert_eq!(lexer.next_token().unwrap(), Token::LParen);
    assert_eq!(lexer.next_token().unwrap(), Token::Variable("foo".to_string()));
    assert_eq!(lexer.next_token().unwrap(), Token::RParen);
    assert_eq!(lexer.next_token().unwrap(), Token::Lt);
    assert_eq!(lexer.next_token().unwrap(), Token::Number(10.0));
    assert_eq!(lexer.next_token().unwrap(), Token::And);
    assert_eq!(lexer.next_token().unwrap(), Token::Variable("bar.status".to_string()));
    assert_eq!(lexer.next_token().unwrap(), Token::EqEq);
    assert_eq!(lexer.next_token().unwrap(), Token::String("ok".to_string()));
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}
