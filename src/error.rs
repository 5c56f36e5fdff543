/// Parsing errors.
///
/// Defines all error types that can occur while normalizing, tokenizing, or
/// converting an expression to postfix form.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating a postfix
/// sequence or driving the engine out of order.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;

/// Any error produced on the way from text to result.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The expression could not be parsed.
    Parse(ParseError),
    /// The parsed expression could not be evaluated.
    Eval(EvalError),
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<EvalError> for Error {
    fn from(error: EvalError) -> Self {
        Self::Eval(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}
