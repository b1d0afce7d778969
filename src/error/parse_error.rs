use thiserror::Error;

/// Raised when no token definition matches at the current input position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error on line {line}: Unrecognized input '{text}'.")]
pub struct LexError {
    /// The text the lexer could not classify.
    pub text: String,
    /// The source line where the error occurred.
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer rejected part of the input.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// Found a token the grammar does not allow at this point.
    #[error("Error on line {line}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// The token encountered.
        found:    String,
        /// What the parser was looking for.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Unexpected end of input: expected {expected}.")]
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: String,
    },
    /// A complete program was parsed but tokens remain.
    #[error("Error on line {line}: Extra tokens after expression, starting at {token}.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A block form such as `while(...) { ... }` did not get exactly one head
    /// expression.
    #[error("Error on line {line}: '{name}' takes exactly one condition before its block, found {found}.")]
    InvalidBlockFormHead {
        /// The name of the block form.
        name:  String,
        /// The number of head expressions supplied.
        found: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}
