use logos::Logos;
use tracing::trace;

use crate::{error::ParseError, interpreter::converter::ParseResult};

/// A binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// Represents a lexical token of an arithmetic expression.
///
/// Tokens are produced by [`tokenize`] and consumed by the converter and the
/// evaluator. They are plain `Copy` values and never change once produced.
#[derive(Logos, Debug, Copy, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `3.14` or `.5`.
    ///
    /// The pattern deliberately accepts any run of digits and points so that
    /// `1.2.3` is reported as one malformed number.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// `+`, `-`, `*` or `/`.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    Operator(Operator),
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(operator) => write!(f, "{operator}"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value if the slice is a valid decimal.
/// - `None`: If the slice is not a valid decimal, e.g. `1.2.3` or `.`.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Returns `true` for the characters that form operator and parenthesis
/// tokens.
const fn is_operator_symbol(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '(' | ')')
}

/// Prepares raw input for tokenization.
///
/// All whitespace is removed. A unary minus is rewritten into a binary
/// subtraction by injecting a `0` in front of it, both at the very start of
/// the expression and directly after an opening parenthesis.
///
/// # Example
/// ```
/// use rpncalc::interpreter::lexer::normalize;
///
/// assert_eq!(normalize(" -3 + 4 "), "0-3+4");
/// assert_eq!(normalize("5 - (-2)"), "5-(0-2)");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    let mut normalized = String::with_capacity(compact.len() + 1);
    if compact.starts_with('-') {
        normalized.push('0');
    }

    let mut previous = None;
    for c in compact.chars() {
        if c == '-' && previous == Some('(') {
            normalized.push('0');
        }
        normalized.push(c);
        previous = Some(c);
    }

    normalized
}

/// Scans a normalized expression into an infix token sequence.
///
/// Each operator and parenthesis becomes its own token; a maximal run of
/// digits and decimal points becomes one [`Token::Number`]. Adjacent operators
/// simply produce adjacent tokens, there is no empty number between them.
///
/// # Errors
/// - `EmptyOrNoOperator` if the text contains no operator or parenthesis.
/// - `MalformedNumber` if a digit run is not a valid decimal.
/// - `UnexpectedCharacter` for anything else that is not part of the grammar.
///
/// # Example
/// ```
/// use rpncalc::interpreter::lexer::{Operator, Token, tokenize};
///
/// let tokens = tokenize("1.5*(2)").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(1.5),
///                 Token::Operator(Operator::Mul),
///                 Token::LeftParen,
///                 Token::Number(2.0),
///                 Token::RightParen]);
/// ```
pub fn tokenize(normalized: &str) -> ParseResult<Vec<Token>> {
    if !normalized.chars().any(is_operator_symbol) {
        return Err(ParseError::EmptyOrNoOperator);
    }

    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(normalized);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push(tok);
        } else {
            return Err(lexical_error(lexer.slice(), lexer.span().start));
        }
    }

    trace!(count = tokens.len(), "tokenized expression");
    Ok(tokens)
}

/// Classifies a slice the lexer rejected.
fn lexical_error(slice: &str, position: usize) -> ParseError {
    match slice.chars().next() {
        Some(c) if c.is_ascii_digit() || c == '.' => {
            ParseError::MalformedNumber { text: slice.to_string(),
                                          position }
        },
        Some(character) => ParseError::UnexpectedCharacter { character, position },
        None => ParseError::EmptyOrNoOperator,
    }
}

/// Renders a token sequence with single spaces between tokens.
///
/// # Example
/// ```
/// use rpncalc::interpreter::{converter::convert, lexer::{format_tokens, tokenize}};
///
/// let postfix = convert(&tokenize("2+3*4").unwrap()).unwrap();
/// assert_eq!(format_tokens(&postfix), "2 3 4 * +");
/// ```
#[must_use]
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(" ")
}
