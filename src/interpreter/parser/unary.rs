use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, Name, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_comparison,
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect, parse_comma_separated, unexpected},
        },
    },
};

/// Parses logical negation.
///
/// `not` sits between `and` and the comparisons, and may be repeated:
/// `not not x` parses as `not (not x)`.
///
/// Grammar:
/// ```text
///     not := "not" not
///          | comparison
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::Unary`] or the comparison-level expression.
pub(crate) fn parse_not<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Not, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let operand = parse_not(tokens)?;
        Ok(Expr::Unary { op: UnaryOperator::Not,
                         operand: Box::new(operand),
                         line })
    } else {
        parse_comparison(tokens)
    }
}

/// Parses a primary expression followed by any number of index brackets.
///
/// Each bracket holds a comma-separated list; the list becomes the right
/// operand of an [`BinaryOperator::Index`] node, and chained brackets nest
/// left to right:
/// ```text
///        a[0][1]   =>   (a[0])[1]
/// ```
/// Grammar:
/// ```text
///     index := primary ("[" elements "]")*
/// ```
/// # Errors
/// Returns a `ParseError` if an element fails to parse or a `[` is not
/// closed.
pub(crate) fn parse_index<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut node = parse_primary(tokens)?;

    while let Some((Token::LBracket, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let elements = parse_comma_separated(tokens, parse_expression, &Token::RBracket)?;
        node = Expr::Binary { left: Box::new(node),
                              op: BinaryOperator::Index,
                              right: Box::new(Expr::List { elements, line }),
                              line };
    }
    Ok(node)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - integer, real and text literals
/// - identifiers, calls and block forms
/// - parenthesized expressions
/// - list literals (`[ ... ]`)
/// - blocks (`{ ... }`)
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | identifier_form
///              | "(" expression ")"
///              | "[" elements "]"
///              | block
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek().copied() {
        Some((Token::Integer(n), line)) => {
            tokens.next();
            Ok(Expr::Literal { value: (*n).into(),
                               line:  *line, })
        },
        Some((Token::Real(r), line)) => {
            tokens.next();
            Ok(Expr::Literal { value: (*r).into(),
                               line:  *line, })
        },
        Some((Token::Text(s), line)) => {
            tokens.next();
            Ok(Expr::Literal { value: s.as_str().into(),
                               line:  *line, })
        },
        Some((Token::LParen, _)) => parse_grouping(tokens),
        Some((Token::LBracket, _)) => parse_list_literal(tokens),
        Some((Token::LBrace, _)) => parse_block(tokens),
        Some((Token::Identifier(_), _)) => parse_identifier_form(tokens),
        other => Err(unexpected(other, "an expression")),
    }
}

/// Parses a parenthesized expression.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LParen)?;
    let expr = parse_expression(tokens)?;
    expect(tokens, &Token::RParen)?;
    Ok(expr)
}

/// Parses a list literal of the form `[expr1, expr2, ..., exprN]`.
fn parse_list_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::LBracket)?;
    let elements = parse_comma_separated(tokens, parse_expression, &Token::RBracket)?;
    Ok(Expr::List { elements, line })
}

/// Parses every form that starts with an identifier.
///
/// Supported forms:
///
/// - `name`, a variable read
/// - `name(arg1, arg2, ...)`, a call
/// - `name(head) { ... }`, a one-block form such as `while` or `if`
/// - `name(head) { ... } other { ... }`, a two-block form such as `if/else`
///
/// A block directly after the closing parenthesis turns a call into a block
/// form. A second block is recognised only when an identifier is immediately
/// followed by `{`.
///
/// # Returns
/// - [`Expr::Variable`] for a bare identifier,
/// - [`Expr::Call`] if followed by parentheses,
/// - [`Expr::OneBlockForm`] or [`Expr::TwoBlockForm`] if blocks follow.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the argument list or a block fails to parse,
/// - a block form does not have exactly one head expression.
fn parse_identifier_form<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, line) = match tokens.next() {
        Some((Token::Identifier(name), line)) => (name, *line),
        other => return Err(unexpected(other, "an identifier")),
    };

    if !matches!(tokens.peek(), Some((Token::LParen, _))) {
        return Ok(Expr::Variable { name: Name::simple(name),
                                   line });
    }
    tokens.next();
    let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;

    if !matches!(tokens.peek(), Some((Token::LBrace, _))) {
        return Ok(Expr::Call { name: Name::simple(name),
                               arguments,
                               line });
    }

    let [head] = <[Expr; 1]>::try_from(arguments).map_err(|arguments| {
                     ParseError::InvalidBlockFormHead { name: name.clone(),
                                                        found: arguments.len(),
                                                        line }
                 })?;
    let first = parse_block(tokens)?;

    let mut lookahead = tokens.clone();
    if let Some((Token::Identifier(other), _)) = lookahead.next()
       && let Some((Token::LBrace, _)) = lookahead.peek()
    {
        tokens.next();
        let second = parse_block(tokens)?;
        return Ok(Expr::TwoBlockForm { name: Name::compound(name, other),
                                       head: Box::new(head),
                                       first: Box::new(first),
                                       second: Box::new(second),
                                       line });
    }

    Ok(Expr::OneBlockForm { name: Name::simple(name),
                            head: Box::new(head),
                            body: Box::new(first),
                            line })
}
