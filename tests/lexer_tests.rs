// tests/lexer_tests.rs

use predicate_lang::ast::Token;
use predicate_lang::lexer::{LexError, Lexer};

fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        if token == Token::Eof {
            return Ok(tokens);
        }
        tokens.push(token);
    }
}

// ============================================================================
// Operators and Delimiters
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let test_cases = vec![
        ("!", Token::Exclamation),
        ("<", Token::Lt),
        (">", Token::Gt),
        ("(", Token::LParen),
        (")", Token::RParen),
        (",", Token::Comma),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token().unwrap();
        assert_eq!(token, expected, "Failed for input: {}", input);
        assert_eq!(lexer.next_token().unwrap(), Token::Eof);
    }
}

#[test]
fn test_two_char_tokens() {
    let test_cases = vec![
        ("==", Token::EqEq),
        ("!=", Token::NotEq),
        ("<=", Token::LtEq),
        (">=", Token::GtEq),
        ("&&", Token::And),
        ("||", Token::Or),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token().unwrap();
        assert_eq!(token, expected, "Failed for input: {}", input);
        assert_eq!(lexer.next_token().unwrap(), Token::Eof);
    }
}

#[test]
fn test_longest_match_wins() {
    assert_eq!(
        tokenize("! != < <= > >=").unwrap(),
        vec![
            Token::Exclamation,
            Token::NotEq,
            Token::Lt,
            Token::LtEq,
            Token::Gt,
            Token::GtEq,
        ]
    );
}

#[test]
fn test_lone_pair_characters_are_invalid() {
    for input in ["=", "&", "|", "a = b"] {
        assert!(tokenize(input).is_err(), "Expected error for input: {}", input);
    }

    let err = tokenize("1 = 2").unwrap_err();
    assert!(err.to_string().contains("did you mean '=='"));
}

// ============================================================================
// Keywords
// ============================================================================

#[test]
fn test_keywords() {
    let test_cases = vec![
        ("true", Token::Boolean(true)),
        ("false", Token::Boolean(false)),
        ("nil", Token::Nil),
        ("True", Token::Boolean(true)),
        ("FALSE", Token::Boolean(false)),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(lexer.next_token().unwrap(), expected, "Failed for input: {}", input);
        assert_eq!(lexer.next_token().unwrap(), Token::Eof);
    }
}

#[test]
fn test_bare_words_are_rejected() {
    for input in ["truth", "null", "and", "foo"] {
        match tokenize(input) {
            Err(LexError::UnknownKeyword { word, .. }) => assert_eq!(word, input),
            other => panic!("Expected UnknownKeyword, got {:?} for input: {}", other, input),
        }
    }
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn test_numbers() {
    let test_cases = vec![
        ("0", 0.0),
        ("42", 42.0),
        ("3.14", 3.14),
        (".5", 0.5),
        ("-3", -3.0),
        ("+4.5", 4.5),
        ("-.25", -0.25),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        match lexer.next_token().unwrap() {
            Token::Number(n) => assert_eq!(n, expected, "Failed for input: {}", input),
            other => panic!("Expected Number, got {:?} for input: {}", other, input),
        }
        assert_eq!(lexer.next_token().unwrap(), Token::Eof);
    }
}

#[test]
fn test_negative_number_in_comparison() {
    assert_eq!(
        tokenize("  -3 <   2").unwrap(),
        vec![Token::Number(-3.0), Token::Lt, Token::Number(2.0)]
    );
}

#[test]
fn test_lone_sign_is_invalid() {
    assert!(tokenize("-").is_err());
    assert!(tokenize("+ 1").is_err());
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn test_simple_strings() {
    let test_cases = vec![
        (r#""hello""#, "hello"),
        (r#""""#, ""),
        (r#""with spaces""#, "with spaces"),
        (r#""$elt == 3""#, "$elt == 3"),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(
            lexer.next_token().unwrap(),
            Token::String(expected.to_string()),
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_string_escapes() {
    let test_cases = vec![
        (r#""a\"b""#, "a\"b"),
        (r#""back\\slash""#, "back\\slash"),
        (r#""line\nbreak""#, "line\nbreak"),
        (r#""tab\there""#, "tab\there"),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(
            lexer.next_token().unwrap(),
            Token::String(expected.to_string()),
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_unterminated_string() {
    assert!(matches!(
        tokenize(r#""never closed"#),
        Err(LexError::UnterminatedString(_))
    ));
    assert!(matches!(
        tokenize(r#""trailing\"#),
        Err(LexError::UnterminatedString(_))
    ));
}

#[test]
fn test_invalid_escape_sequence() {
    assert!(matches!(
        tokenize(r#""\q""#),
        Err(LexError::InvalidEscape { ch: 'q', .. })
    ));
}

// ============================================================================
// Variables
// ============================================================================

#[test]
fn test_variables() {
    let test_cases = vec![
        ("$", ""),
        ("$foo", "foo"),
        ("$foo.bar", "foo.bar"),
        (r#"$foo["value"]"#, r#"foo["value"]"#),
        (r#"$["another-field"]"#, r#"["another-field"]"#),
        ("$foo[1].bar", "foo[1].bar"),
        ("$snake_case.kebab-case", "snake_case.kebab-case"),
        (r#"$foo[ "spaced" ]"#, r#"foo[ "spaced" ]"#),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(
            lexer.next_token().unwrap(),
            Token::Variable(expected.to_string()),
            "Failed for input: {}",
            input
        );
        assert_eq!(lexer.next_token().unwrap(), Token::Eof);
    }
}

#[test]
fn test_variable_stops_at_operator() {
    assert_eq!(
        tokenize("$elt==3").unwrap(),
        vec![
            Token::Variable("elt".to_string()),
            Token::EqEq,
            Token::Number(3.0),
        ]
    );
}

#[test]
fn test_root_variable_before_operator() {
    assert_eq!(
        tokenize("$ < 6").unwrap(),
        vec![
            Token::Variable(String::new()),
            Token::Lt,
            Token::Number(6.0),
        ]
    );
}

#[test]
fn test_unterminated_index() {
    assert!(matches!(
        tokenize(r#"$foo["bar"#),
        Err(LexError::UnterminatedIndex(_))
    ));
}

// ============================================================================
// Functions and Regex
// ============================================================================

#[test]
fn test_function_names() {
    assert_eq!(
        tokenize("@len @select @my_func2").unwrap(),
        vec![
            Token::Function("@len".to_string()),
            Token::Function("@select".to_string()),
            Token::Function("@my_func2".to_string()),
        ]
    );
}

#[test]
fn test_function_without_name() {
    assert!(matches!(
        tokenize("@ (1)"),
        Err(LexError::MissingFunctionName(_))
    ));
}

#[test]
fn test_regex_literal() {
    assert_eq!(
        tokenize(r"/^([0-9]{1,3}\.){3}[0-9]{1,3}$/").unwrap(),
        vec![Token::Regex(r"^([0-9]{1,3}\.){3}[0-9]{1,3}$".to_string())]
    );
}

#[test]
fn test_regex_escaped_slash() {
    assert_eq!(
        tokenize(r"/a\/b/").unwrap(),
        vec![Token::Regex("a/b".to_string())]
    );
}

#[test]
fn test_unterminated_regex() {
    assert!(matches!(
        tokenize("/abc"),
        Err(LexError::UnterminatedRegex(_))
    ));
}

// ============================================================================
// Full Expressions
// ============================================================================

#[test]
fn test_function_call_expression() {
    assert_eq!(
        tokenize(r#"@select( $arr, "$elt == 3" )"#).unwrap(),
        vec![
            Token::Function("@select".to_string()),
            Token::LParen,
            Token::Variable("arr".to_string()),
            Token::Comma,
            Token::String("$elt == 3".to_string()),
            Token::RParen,
        ]
    );
}

#[test]
fn test_no_space_between_tokens() {
    assert_eq!(
        tokenize("!(1<2)&&$x!=nil").unwrap(),
        vec![
            Token::Exclamation,
            Token::LParen,
            Token::Number(1.0),
            Token::Lt,
            Token::Number(2.0),
            Token::RParen,
            Token::And,
            Token::Variable("x".to_string()),
            Token::NotEq,
            Token::Nil,
        ]
    );
}

#[test]
fn test_empty_input() {
    assert_eq!(tokenize("").unwrap(), vec![]);
    assert_eq!(tokenize(" \t ").unwrap(), vec![]);
}

#[test]
fn test_invalid_character() {
    match tokenize("1 # 2") {
        Err(LexError::UnexpectedChar { ch, position }) => {
            assert_eq!(ch, '#');
            assert_eq!(position.offset, 2);
        }
        other => panic!("Expected UnexpectedChar, got {:?}", other),
    }
}
