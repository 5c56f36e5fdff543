use tracing::debug;

use crate::{
    error::EvalError,
    interpreter::{
        converter::{ParseResult, convert},
        evaluator::{DivisionMode, EvalResult, evaluate},
        lexer::{Token, format_tokens, normalize, tokenize},
    },
};

/// Parses an expression once and evaluates it on demand.
///
/// An engine starts empty. [`parse`](Self::parse) fills it with the infix and
/// postfix forms of one expression; [`run`](Self::run) evaluates the stored
/// postfix form as often as needed; [`reset`](Self::reset) empties it again so
/// that another expression can be parsed.
///
/// An engine is not meant to be shared between callers. Independent
/// expressions use independent engines.
///
/// ## Usage
///
/// ```
/// use rpncalc::{Engine, error::EvalError};
///
/// let mut engine = Engine::new();
/// assert_eq!(engine.run(), Err(EvalError::NotParsed));
///
/// engine.parse("(2 + 3) * 4").unwrap();
/// assert_eq!(engine.run(), Ok(20.0));
///
/// engine.reset();
/// engine.parse("-3 + 4").unwrap();
/// assert_eq!(engine.run(), Ok(1.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Engine {
    infix:         Vec<Token>,
    postfix:       Vec<Token>,
    parsed:        bool,
    division_mode: DivisionMode,
}

impl Engine {
    /// Creates an empty engine with IEEE 754 division.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty engine with the given division-by-zero policy.
    #[must_use]
    pub fn with_division_mode(division_mode: DivisionMode) -> Self {
        Self { division_mode,
               ..Self::default() }
    }

    /// Parses `text` and stores its infix and postfix forms.
    ///
    /// Does nothing if the engine already holds a parsed expression; call
    /// [`reset`](Self::reset) first to parse a different one.
    ///
    /// The infix form is kept once tokenization succeeds, even if the
    /// conversion to postfix then fails. The engine only counts as parsed
    /// after both steps succeed, so `run` keeps reporting `NotParsed` after a
    /// failure.
    ///
    /// # Errors
    /// Returns any `ParseError` raised by tokenization or conversion.
    pub fn parse(&mut self, text: &str) -> ParseResult<()> {
        if self.parsed {
            debug!("expression already parsed, ignoring new input");
            return Ok(());
        }

        self.infix.clear();
        self.postfix.clear();

        let normalized = normalize(text);
        debug!(%normalized, "normalized expression");

        self.infix = tokenize(&normalized)?;
        self.postfix = convert(&self.infix)?;
        self.parsed = true;

        debug!(postfix = %format_tokens(&self.postfix), "parsed expression");
        Ok(())
    }

    /// Evaluates the stored postfix expression.
    ///
    /// Stored state is never modified, so repeated runs return the same
    /// result.
    ///
    /// # Errors
    /// - `NotParsed` if no parse has succeeded since creation or the last
    ///   reset.
    /// - Any `EvalError` raised by the evaluator.
    pub fn run(&self) -> EvalResult<f64> {
        if !self.parsed {
            return Err(EvalError::NotParsed);
        }

        let value = evaluate(&self.postfix, self.division_mode)?;
        debug!(value, "evaluated expression");
        Ok(value)
    }

    /// Forgets the stored expression, including any partial state left by a
    /// failed parse.
    pub fn reset(&mut self) {
        self.infix.clear();
        self.postfix.clear();
        self.parsed = false;
    }

    /// Returns `true` once a parse has fully succeeded.
    #[must_use]
    pub const fn is_parsed(&self) -> bool {
        self.parsed
    }

    /// The stored infix sequence.
    #[must_use]
    pub fn infix(&self) -> &[Token] {
        &self.infix
    }

    /// The stored postfix sequence. Empty unless parsed.
    #[must_use]
    pub fn postfix(&self) -> &[Token] {
        &self.postfix
    }

    #[must_use]
    pub const fn division_mode(&self) -> DivisionMode {
        self.division_mode
    }
}
