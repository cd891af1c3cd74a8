#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    /// Numeric literal, with optional leading sign and decimal point
    ///
    /// # Examples
    /// ```text
    /// 42
    /// -3
    /// +4.5
    /// .5
    /// ```
    Number(f64),

    /// String literal enclosed in double quotes, already unescaped
    ///
    /// # Examples
    /// ```text
    /// "hello"
    /// "a\"b"
    /// ```
    String(String),

    /// Boolean keywords `true` / `false`
    Boolean(bool),

    /// The `nil` keyword
    Nil,

    /// Regex literal delimited by slashes, pattern text only
    ///
    /// # Examples
    /// ```text
    /// /^[a-z]+$/
    /// ```
    Regex(String),

    // References
    /// Variable reference, sigil stripped
    ///
    /// # Examples
    /// ```text
    /// $              // Variable("")
    /// $foo.bar       // Variable("foo.bar")
    /// $foo["k-1"]    // Variable("foo[\"k-1\"]")
    /// $items[2].id   // Variable("items[2].id")
    /// ```
    Variable(String),

    /// Function name, sigil included
    ///
    /// # Examples
    /// ```text
    /// @len
    /// @select
    /// ```
    Function(String),

    // Operators
    /// Unary not (`!`)
    Exclamation,

    /// Equality
    EqEq,

    /// Inequality
    NotEq,

    /// Less than
    Lt,

    /// Less than or equal
    LtEq,

    /// Greater than
    Gt,

    /// Greater than or equal
    GtEq,

    /// Logical AND (`&&`)
    And,

    /// Logical OR (`||`)
    Or,

    // Delimiters
    /// Left parenthesis for grouping or function calls
    LParen,

    /// Right parenthesis
    RParen,

    /// Comma for separating function arguments
    Comma,

    /// End of input
    Eof,
}

impl Token {
    /// Source spelling of operator and delimiter tokens.
    pub fn symbol(&self) -> Option<&'static str> {
        let symbol = match self {
            Token::Exclamation => "!",
            Token::EqEq => "==",
            Token::NotEq => "!=",
            Token::Lt => "<",
            Token::LtEq => "<=",
            Token::Gt => ">",
            Token::GtEq => ">=",
            Token::And => "&&",
            Token::Or => "||",
            Token::LParen => "(",
            Token::RParen => ")",
            Token::Comma => ",",
            _ => return None,
        };
        Some(symbol)
    }
}
