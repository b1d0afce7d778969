//! # sprig
//!
//! sprig is a small expression-oriented scripting language with a
//! tree-walking interpreter. Everything is an expression, including blocks
//! and the special forms `if`, `if/else` and `while`, which receive their
//! operands unevaluated.

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

use logos::Logos;
use tracing::debug;

use crate::{
    ast::Expr,
    error::{Error, LexError, ParseError},
    interpreter::{
        evaluator::core::Context,
        lexer::{LexerExtras, Token, token_line},
        parser::core::parse_program,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the expression node set, names and assignment targets.
/// - Attaches source lines to every node for error reporting.
/// - Gives every block node its own persistent scope frame.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing, or
/// evaluating code. Every message carries the source line it refers to.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations.
pub mod interpreter;
/// Numeric helpers shared by the evaluator.
pub mod util;

/// Splits source text into `(Token, line)` pairs.
///
/// Whitespace and comments are dropped.
///
/// # Errors
/// Returns a `LexError` carrying the offending text and line if some input
/// matches no token.
///
/// # Example
/// ```
/// use sprig::{interpreter::lexer::Token, tokenize};
///
/// let tokens = tokenize("x = 1 # set x\n").unwrap();
/// let kinds = tokens.into_iter().map(|(token, _)| token).collect::<Vec<_>>();
///
/// assert_eq!(kinds, vec![Token::Identifier("x".into()), Token::Assign, Token::Integer(1)]);
/// assert!(tokenize("a =< b").is_err());
///
/// // A token is tagged with the line it starts on.
/// let lines = tokenize("\"two\nlines\" x").unwrap();
/// assert_eq!(lines.iter().map(|(_, line)| *line).collect::<Vec<_>>(), vec![1, 2]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras::default());

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, token_line(&lexer)));
        } else {
            return Err(LexError { text: lexer.slice().to_string(),
                                  line: lexer.extras.line, });
        }
    }

    debug!(count = tokens.len(), lines = lexer.extras.line, "tokenized source");
    Ok(tokens)
}

/// Parses source text into the expression tree of a program.
///
/// # Errors
/// Returns a `ParseError` if the text cannot be tokenized or is not a single
/// well-formed expression.
///
/// # Example
/// ```
/// use sprig::{ast::Expr, parse};
///
/// assert!(matches!(parse("1 + 2").unwrap(), Expr::Binary { .. }));
/// assert!(parse("1 2").is_err());
/// assert!(parse("").is_err());
/// ```
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(source)?;
    parse_program(&tokens)
}

/// Parses `source` and evaluates it against a fresh root scope.
///
/// `print` writes to standard output.
///
/// # Errors
/// Returns `Error::Syntax` if the source does not parse, and
/// `Error::Semantic` if its evaluation fails.
///
/// # Examples
/// ```
/// use sprig::{interpreter::value::core::Value, run};
///
/// assert_eq!(run("1 + 2 * 3").unwrap(), Value::Integer(7));
/// assert_eq!(run("{ a = [1, 2, 3]; a[0 - 1]; }").unwrap(), Value::Integer(3));
///
/// // 'y' is bound in the inner block's frame only.
/// assert!(run("{ {y = 1;}; y; }").is_err());
/// ```
pub fn run(source: &str) -> Result<Value, Error> {
    let program = parse(source)?;
    let mut context = Context::new();
    Ok(context.evaluate(&program)?)
}
