use tracing::trace;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Operator, Token},
        stack::Stack,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

impl Token {
    /// Returns the precedence rank of an operator or bracket.
    ///
    /// `(` ranks lowest so that no operator ever pops it; only a matching `)`
    /// does. `)` ranks highest and acts as a sentinel. Numbers have no rank.
    ///
    /// # Example
    /// ```
    /// use rpncalc::interpreter::lexer::{Operator, Token};
    ///
    /// assert!(Token::Operator(Operator::Mul).precedence() > Token::Operator(Operator::Sub).precedence());
    /// assert_eq!(Token::Number(1.0).precedence(), None);
    /// ```
    #[must_use]
    pub const fn precedence(&self) -> Option<u8> {
        match self {
            Self::LeftParen => Some(1),
            Self::Operator(Operator::Add | Operator::Sub) => Some(2),
            Self::Operator(Operator::Mul | Operator::Div) => Some(3),
            Self::RightParen => Some(4),
            Self::Number(_) => None,
        }
    }
}

/// Converts an infix token sequence into postfix (reverse Polish) order.
///
/// This is the shunting-yard algorithm. Numbers go straight to the output.
/// Operators wait on a stack until an operator of lower rank arrives; on equal
/// rank the waiting operator leaves first, which makes every operator left
/// associative. Parentheses only steer the stack and never reach the output.
///
/// # Parameters
/// - `infix`: Tokens in source order, as produced by
///   [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Returns
/// A sequence containing only numbers and operators.
///
/// # Errors
/// Returns `UnbalancedBrackets` if a `)` has no matching `(` or a `(` is
/// never closed.
///
/// # Example
/// ```
/// use rpncalc::interpreter::{converter::convert, lexer::{format_tokens, tokenize}};
///
/// let postfix = convert(&tokenize("(2+3)*4").unwrap()).unwrap();
/// assert_eq!(format_tokens(&postfix), "2 3 + 4 *");
/// ```
pub fn convert(infix: &[Token]) -> ParseResult<Vec<Token>> {
    let mut output = Vec::with_capacity(infix.len());
    let mut operators: Stack<Token> = Stack::new();

    for (position, &token) in infix.iter().enumerate() {
        match token {
            Token::Number(_) => output.push(token),
            Token::LeftParen => operators.push(token),
            Token::RightParen => close_bracket(&mut operators, &mut output, position)?,
            Token::Operator(_) => {
                while let Some(top) = operators.peek()
                      && top.precedence() >= token.precedence()
                {
                    output.push(*top);
                    operators.pop();
                }
                operators.push(token);
            },
        }
    }

    while let Some(token) = operators.pop() {
        if token == Token::LeftParen {
            return Err(ParseError::UnbalancedBrackets { bracket:  '(',
                                                        position: infix.len(), });
        }
        output.push(token);
    }

    trace!(count = output.len(), "converted expression to postfix");
    Ok(output)
}

/// Moves operators to the output until the `(` matching the `)` at
/// `position` is found and discarded.
fn close_bracket(operators: &mut Stack<Token>,
                 output: &mut Vec<Token>,
                 position: usize)
                 -> ParseResult<()> {
    while let Some(token) = operators.pop() {
        if token == Token::LeftParen {
            return Ok(());
        }
        output.push(token);
    }

    Err(ParseError::UnbalancedBrackets { bracket: ')',
                                         position })
}
