use crate::interpreter::lexer::{Operator, Token};

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating a postfix sequence.
///
/// Positions are indices into the postfix sequence.
pub enum EvalError {
    /// Evaluation was requested before an expression was parsed successfully.
    NotParsed,
    /// An operator found fewer than two values on the stack.
    InsufficientOperands {
        /// The operator that could not be applied.
        operator: Operator,
        /// Index of the operator in the postfix sequence.
        position: usize,
    },
    /// Evaluation finished with a number of values other than one.
    ResultCardinality {
        /// How many values were left on the stack.
        count: usize,
    },
    /// A token that can never appear in a postfix sequence.
    TypeMismatch {
        /// The token encountered.
        token: Token,
    },
    /// Division by zero under [`DivisionMode::Strict`].
    ///
    /// [`DivisionMode::Strict`]: crate::interpreter::evaluator::DivisionMode::Strict
    DivisionByZero {
        /// Index of the `/` in the postfix sequence.
        position: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotParsed => write!(f, "No expression has been parsed."),
            Self::InsufficientOperands { operator, position } => write!(f,
                                                                        "Error at token {position}: Operator '{operator}' needs two operands."),
            Self::ResultCardinality { count } => write!(f,
                                                        "Evaluation left {count} values on the stack, expected exactly one."),
            Self::TypeMismatch { token } => {
                write!(f, "Token '{token}' cannot appear in a postfix expression.")
            },
            Self::DivisionByZero { position } => {
                write!(f, "Error at token {position}: Division by zero.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
