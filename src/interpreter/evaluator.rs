use tracing::trace;

use crate::{
    error::EvalError,
    interpreter::{
        lexer::{Operator, Token},
        stack::Stack,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// How division by zero is treated.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum DivisionMode {
    /// Plain `f64` division: `1/0` is `inf`, `0/0` is `NaN`.
    #[default]
    Ieee754,
    /// A zero divisor is reported as [`EvalError::DivisionByZero`].
    Strict,
}

impl Operator {
    /// Applies the operator as `left OP right`.
    ///
    /// # Example
    /// ```
    /// use rpncalc::interpreter::lexer::Operator;
    ///
    /// assert_eq!(Operator::Sub.apply(7.0, 2.0), 5.0);
    /// assert_eq!(Operator::Div.apply(1.0, 4.0), 0.25);
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}

/// Evaluates a postfix token sequence.
///
/// Numbers are pushed onto a value stack. An operator pops its right operand
/// first, then its left operand, and pushes `left OP right`. When the
/// sequence is exhausted exactly one value must remain.
///
/// # Parameters
/// - `postfix`: Numbers and operators in reverse Polish order.
/// - `mode`: Division-by-zero policy.
///
/// # Errors
/// - `InsufficientOperands` if an operator finds fewer than two values.
/// - `ResultCardinality` if the stack does not end with exactly one value.
/// - `TypeMismatch` if the sequence contains a parenthesis.
/// - `DivisionByZero` for a zero divisor under [`DivisionMode::Strict`].
///
/// # Example
/// ```
/// use rpncalc::interpreter::{
///     evaluator::{DivisionMode, evaluate},
///     lexer::{Operator, Token},
/// };
///
/// let postfix = [Token::Number(2.0), Token::Number(3.0), Token::Operator(Operator::Add)];
/// assert_eq!(evaluate(&postfix, DivisionMode::Ieee754).unwrap(), 5.0);
///
/// let dangling = [Token::Number(3.0), Token::Operator(Operator::Add)];
/// assert!(evaluate(&dangling, DivisionMode::Ieee754).is_err());
/// ```
pub fn evaluate(postfix: &[Token], mode: DivisionMode) -> EvalResult<f64> {
    let mut values: Stack<f64> = Stack::with_capacity(postfix.len());

    for (position, &token) in postfix.iter().enumerate() {
        match token {
            Token::Number(value) => values.push(value),
            Token::Operator(operator) => {
                let (Some(right), Some(left)) = (values.pop(), values.pop()) else {
                    return Err(EvalError::InsufficientOperands { operator, position });
                };

                if operator == Operator::Div && right == 0.0 && mode == DivisionMode::Strict {
                    return Err(EvalError::DivisionByZero { position });
                }

                let result = operator.apply(left, right);
                trace!(%left, %operator, %right, result, "applied operator");
                values.push(result);
            },
            Token::LeftParen | Token::RightParen => {
                return Err(EvalError::TypeMismatch { token });
            },
        }
    }

    if values.len() != 1 {
        return Err(EvalError::ResultCardinality { count: values.len() });
    }

    values.pop()
          .ok_or(EvalError::ResultCardinality { count: 0 })
}
