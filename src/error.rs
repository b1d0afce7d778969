use thiserror::Error;

/// Lexing and parsing errors.
///
/// Defines the errors raised before evaluation starts: input the lexer cannot
/// tokenize, and token streams that do not match the grammar.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// unresolved names, operand type mismatches, bad calls and bad indices.
pub mod runtime_error;

pub use parse_error::{LexError, ParseError};
pub use runtime_error::RuntimeError;

/// Any failure of a complete run: either the source did not parse, or its
/// evaluation failed.
#[derive(Debug, Error)]
pub enum Error {
    /// The source could not be tokenized or parsed.
    #[error(transparent)]
    Syntax(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Semantic(#[from] RuntimeError),
}

impl Error {
    /// The fixed diagnostic printed by the command line host for this
    /// failure kind.
    ///
    /// # Example
    /// ```
    /// use sprig::run;
    ///
    /// assert_eq!(run("1 +").unwrap_err().banner(), "SYNTAX ERROR");
    /// assert_eq!(run("x").unwrap_err().banner(), "SEMANTIC ERROR");
    /// ```
    #[must_use]
    pub const fn banner(&self) -> &'static str {
        match self {
            Self::Syntax(_) => "SYNTAX ERROR",
            Self::Semantic(_) => "SEMANTIC ERROR",
        }
    }
}
