use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{Expr, WriteTarget},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_or,
            utils::{expect, parse_comma_separated},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete program.
///
/// A program is exactly one expression. Anything left in the token stream
/// after it is an error, and so is an empty stream.
///
/// # Parameters
/// - `tokens`: The `(Token, line)` pairs produced by the lexer.
///
/// # Returns
/// The root expression of the program.
///
/// # Errors
/// - `UnexpectedEndOfInput` for an empty program.
/// - `UnexpectedTrailingTokens` if tokens follow the expression.
/// - Any error from parsing the expression itself.
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let program = parse_expression(&mut iter)?;

    if let Some((token, line)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: token.to_string(),
                                                          line:  *line, });
    }

    debug!(tokens = tokens.len(), "parsed program");
    Ok(program)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// assignment layer and recursively descends through the precedence
/// hierarchy.
///
/// Grammar: `expression := assignment`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_assignment(tokens)
}

/// Parses the assignment layer.
///
/// Assignment applies only when the stream starts with a bare identifier, or
/// an identifier followed by exactly one bracketed index list, and the next
/// token is `=`. The right side is a full expression, which makes chained
/// assignments right-associative. In every other case the layer falls
/// through to `or`.
///
/// Grammar:
/// ```text
///     assignment := IDENT ("[" elements "]")? "=" expression
///                 | or
/// ```
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::Identifier(name), line)) = tokens.peek().copied() else {
        return parse_or(tokens);
    };
    if !starts_assignment(tokens.clone()) {
        return parse_or(tokens);
    }
    tokens.next();
    let line = *line;

    let target = if let Some((Token::LBracket, index_line)) = tokens.peek() {
        let index_line = *index_line;
        tokens.next();
        let elements = parse_comma_separated(tokens, parse_expression, &Token::RBracket)?;
        WriteTarget::Element { name: name.clone(),
                               index: Box::new(Expr::List { elements,
                                                            line: index_line }),
                               line }
    } else {
        WriteTarget::Variable { name: name.clone(),
                                line }
    };

    expect(tokens, &Token::Assign)?;
    let value = parse_expression(tokens)?;

    Ok(Expr::Assign { target,
                      value: Box::new(value),
                      line })
}

/// Scans ahead, without consuming anything from the caller's stream, for
/// `IDENT =` or `IDENT [ ... ] =`.
///
/// The bracket contents are skipped by nesting depth rather than parsed.
fn starts_assignment<'a, I>(mut lookahead: Peekable<I>) -> bool
    where I: Iterator<Item = &'a (Token, usize)>
{
    if !matches!(lookahead.next(), Some((Token::Identifier(_), _))) {
        return false;
    }

    if let Some((Token::LBracket, _)) = lookahead.peek() {
        lookahead.next();
        let mut depth = 1usize;
        while depth > 0 {
            match lookahead.next() {
                Some((Token::LBracket, _)) => depth += 1,
                Some((Token::RBracket, _)) => depth -= 1,
                Some(_) => {},
                None => return false,
            }
        }
    }

    matches!(lookahead.next(), Some((Token::Assign, _)))
}
