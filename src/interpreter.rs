/// The converter module reorders infix tokens into postfix form.
///
/// It implements the shunting-yard algorithm on top of the precedence table
/// attached to [`lexer::Token`]. Bracket mismatches are detected here.
///
/// # Responsibilities
/// - Resolves operator precedence and left associativity.
/// - Removes parentheses while preserving the grouping they express.
/// - Reports unbalanced brackets.
pub mod converter;
/// The engine module ties the phases together behind a small stateful facade.
///
/// The [`engine::Engine`] parses one expression, keeps both token sequences,
/// and evaluates them on demand until it is reset.
pub mod engine;
/// The evaluator module computes the value of a postfix sequence.
///
/// # Responsibilities
/// - Applies operators to operands using a value stack.
/// - Checks operand counts and the final stack size.
/// - Applies the configured division-by-zero policy.
pub mod evaluator;
/// The lexer module turns raw text into tokens.
///
/// It strips whitespace, rewrites unary minus into binary subtraction, and
/// scans the result into numbers, operators and parentheses. This is the
/// first stage of evaluation.
///
/// # Responsibilities
/// - Defines the [`lexer::Token`] and [`lexer::Operator`] types.
/// - Normalizes input text.
/// - Reports missing operators, malformed numbers and stray characters.
pub mod lexer;
/// A typed LIFO stack shared by the converter and the evaluator.
pub mod stack;
