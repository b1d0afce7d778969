use std::iter::Peekable;

use crate::{
    ast::{Block, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::expect,
        },
    },
};

/// Parses a block expression delimited by braces.
///
/// A block consists of zero or more statements. Parsing continues until the
/// matching `}` token is encountered.
///
/// Grammar: `block := "{" statement* "}"`
///
/// The resulting expression is an `Expr::Block` whose scope frame has not
/// been allocated yet.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
///
/// # Returns
/// A block expression containing all parsed statements.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::LBrace)?;
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => {
                return Err(ParseError::UnexpectedEndOfInput { expected: Token::RBrace.to_string() });
            },
        }
    }

    Ok(Expr::Block(Block::new(statements, line)))
}

/// Parses one statement inside a block.
///
/// A one- or two-block form is a complete statement on its own. Any other
/// expression must be terminated by `;`.
///
/// Grammar:
/// ```text
///     statement := block_form
///                | expression ";"
/// ```
fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let statement = parse_expression(tokens)?;
    if !statement.is_block_form() {
        expect(tokens, &Token::Semicolon)?;
    }
    Ok(statement)
}
