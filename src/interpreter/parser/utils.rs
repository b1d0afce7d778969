use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by list literals, index brackets and call argument
/// lists. It repeatedly calls `parse_item` to parse one element, expecting
/// either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g., `]` or `)`).
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, _)) if tok == closing => break,
            Some((tok, line)) => {
                return Err(ParseError::UnexpectedToken { found:    tok.to_string(),
                                                         expected: format!("',' or {closing}"),
                                                         line:     *line, });
            },
            None => {
                return Err(ParseError::UnexpectedEndOfInput { expected: closing.to_string() });
            },
        }
    }
    Ok(items)
}

/// Consumes the next token, which must equal `expected`.
///
/// # Returns
/// The line the token was found on.
///
/// # Errors
/// `UnexpectedToken` if a different token is next, `UnexpectedEndOfInput` if
/// the stream is exhausted.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token)
                                                    -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, line)) if tok == expected => Ok(*line),
        Some((tok, line)) => Err(ParseError::UnexpectedToken { found:    tok.to_string(),
                                                               expected: expected.to_string(),
                                                               line:     *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { expected: expected.to_string() }),
    }
}

/// Builds the error for a token that cannot start the construct being
/// parsed.
pub(in crate::interpreter::parser) fn unexpected(found: Option<&(Token, usize)>,
                                                 expected: &str)
                                                 -> ParseError {
    match found {
        Some((tok, line)) => ParseError::UnexpectedToken { found:    tok.to_string(),
                                                           expected: expected.to_string(),
                                                           line:     *line, },
        None => ParseError::UnexpectedEndOfInput { expected: expected.to_string() },
    }
}
