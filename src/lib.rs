//! # rpncalc
//!
//! rpncalc evaluates arithmetic expressions written in infix notation.
//! Expressions may contain decimal numbers, unary minus, the four basic
//! operators and parentheses. Evaluation happens in three steps: the text is
//! tokenized, the tokens are reordered into postfix form with the
//! shunting-yard algorithm, and the postfix form is evaluated on a stack.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides the error types for parsing and evaluation.
///
/// Parsing and evaluation fail in distinct ways, so each phase has its own
/// error enum. Both carry enough context (offsets, operators, counts) for a
/// useful message, and both convert into the crate-wide [`error::Error`].
///
/// # Responsibilities
/// - Defines `ParseError` for normalization, tokenization and conversion.
/// - Defines `EvalError` for evaluation and engine misuse.
/// - Implements `Display` and `std::error::Error` for all of them.
pub mod error;
/// Implements the evaluation pipeline.
///
/// This module contains the lexer, the operator and value stack, the
/// infix-to-postfix converter, the postfix evaluator, and the engine that
/// drives them.
///
/// # Responsibilities
/// - Converts text into tokens, tokens into postfix order, and postfix order
///   into a number.
/// - Keeps parse state between evaluations.
pub mod interpreter;

pub use error::Error;
pub use interpreter::{
    engine::Engine,
    evaluator::DivisionMode,
    lexer::{Operator, Token},
};

/// Parses and evaluates an expression in one step.
///
/// A fresh [`Engine`] with IEEE 754 division is used for every call.
///
/// # Errors
/// Returns `Error::Parse` if the expression cannot be parsed and
/// `Error::Eval` if it cannot be evaluated.
///
/// # Examples
/// ```
/// use rpncalc::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate("5 - (-2)").unwrap(), 7.0);
///
/// // No operator at all.
/// assert!(evaluate("42").is_err());
/// ```
pub fn evaluate(text: &str) -> Result<f64, Error> {
    let mut engine = Engine::new();
    engine.parse(text)?;
    Ok(engine.run()?)
}
