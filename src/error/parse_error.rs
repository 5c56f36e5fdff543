#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while turning text into a postfix
/// sequence.
///
/// Positions refer to the normalized expression: whitespace is already
/// stripped and an implicit `0` may have been injected before a unary minus.
pub enum ParseError {
    /// The input contains no operator or parenthesis at all.
    EmptyOrNoOperator,
    /// A run of digits and decimal points is not a valid number.
    MalformedNumber {
        /// The offending text.
        text:     String,
        /// Byte offset of the run in the normalized expression.
        position: usize,
    },
    /// A character that is neither a digit, a decimal point, an operator nor
    /// a parenthesis.
    UnexpectedCharacter {
        /// The character encountered.
        character: char,
        /// Byte offset of the character in the normalized expression.
        position:  usize,
    },
    /// Parentheses do not pair up.
    UnbalancedBrackets {
        /// The bracket that has no partner, `(` or `)`.
        bracket:  char,
        /// Index in the infix sequence where the imbalance was detected. For
        /// an unclosed `(` this is the length of the sequence.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyOrNoOperator => {
                write!(f, "Expression contains no operator.")
            },

            Self::MalformedNumber { text, position } => {
                write!(f, "Error at offset {position}: Malformed number '{text}'.")
            },

            Self::UnexpectedCharacter { character, position } => {
                write!(f, "Error at offset {position}: Unexpected character '{character}'.")
            },

            Self::UnbalancedBrackets { bracket: '(', .. } => {
                write!(f, "Unbalanced brackets: '(' is never closed.")
            },

            Self::UnbalancedBrackets { bracket, position } => write!(f,
                                                                     "Error at token {position}: Unbalanced brackets, '{bracket}' has no partner."),
        }
    }
}

impl std::error::Error for ParseError {}
