use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            unary::{parse_index, parse_not},
        },
    },
};

/// Parses one left-associative binary layer.
///
/// Operands are parsed with `next`; between them, any operator accepted by
/// `accepts` folds the accumulated left side into a new `Expr::Binary` node.
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `accepts`: Which operators belong to this layer.
/// - `next`: Parser for the next tighter-binding layer.
///
/// # Returns
/// A left-leaning `Expr::Binary` tree, or the single operand if no operator
/// of this layer follows it.
fn parse_binary_layer<'a, I>(tokens: &mut Peekable<I>,
                             accepts: impl Fn(BinaryOperator) -> bool,
                             next: impl Fn(&mut Peekable<I>) -> ParseResult<Expr>)
                             -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = next(tokens)?;
    while let Some((token, line)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && accepts(op)
    {
        let line = *line;
        tokens.next();
        let right = next(tokens)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              line };
    }
    Ok(left)
}

/// Parses logical disjunction.
///
/// The rule is: `or := and ("or" and)*`
pub fn parse_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_binary_layer(tokens, |op| op == BinaryOperator::Or, parse_and)
}

/// Parses logical conjunction. `and` and `&&` are the same operator.
///
/// The rule is: `and := not (("and" | "&&") not)*`
pub fn parse_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_binary_layer(tokens, |op| op == BinaryOperator::And, parse_not)
}

/// Parses relational and equality operators.
///
/// This layer handles all six comparisons with equal precedence, so
/// `a < b == c` compares the result of `a < b` with `c`.
///
/// The rule is: `comparison := membership (("<=" | "==" | "<>" | ">=" | "<" |
/// ">") membership)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_binary_layer(tokens,
                       |op| {
                           matches!(op,
                                    BinaryOperator::LessEqual
                                    | BinaryOperator::Equal
                                    | BinaryOperator::NotEqual
                                    | BinaryOperator::GreaterEqual
                                    | BinaryOperator::Less
                                    | BinaryOperator::Greater)
                       },
                       parse_membership)
}

/// Parses membership tests.
///
/// The rule is: `membership := additive ("in" additive)*`
fn parse_membership<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_binary_layer(tokens, |op| op == BinaryOperator::In, parse_additive)
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `additive := floor_div (("+" | "-") floor_div)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_binary_layer(tokens,
                       |op| matches!(op, BinaryOperator::Add | BinaryOperator::Sub),
                       parse_floor_div)
}

/// Parses floor division.
///
/// The rule is: `floor_div := power ("//" power)*`
fn parse_floor_div<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_binary_layer(tokens, |op| op == BinaryOperator::FloorDiv, parse_power)
}

/// Parses exponentiation.
///
/// Exponentiation is left-associative here: `2 ** 3 ** 2` parses as
/// `(2 ** 3) ** 2`.
///
/// The rule is: `power := modulo ("**" modulo)*`
fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_binary_layer(tokens, |op| op == BinaryOperator::Pow, parse_modulo)
}

/// Parses the remainder operator.
///
/// The rule is: `modulo := multiplicative ("%" multiplicative)*`
fn parse_modulo<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_binary_layer(tokens, |op| op == BinaryOperator::Mod, parse_multiplicative)
}

/// Parses multiplication-level expressions.
///
/// The rule is: `multiplicative := index (("*" | "/") index)*`
fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_binary_layer(tokens,
                       |op| matches!(op, BinaryOperator::Mul | BinaryOperator::Div),
                       parse_index)
}

/// Converts a token to its corresponding binary operator, if any.
///
/// Indexing has no token of its own and is built by the postfix parser.
///
/// # Parameters
/// - `token`: The token to convert.
///
/// # Returns
/// - `Some(BinaryOperator)` if the token is an infix operator.
/// - `None` otherwise.
///
/// # Example
/// ```
/// use sprig::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::LessGreater), Some(BinaryOperator::NotEqual));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Or => Some(BinaryOperator::Or),
        Token::And => Some(BinaryOperator::And),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::LessGreater => Some(BinaryOperator::NotEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::In => Some(BinaryOperator::In),
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::SlashSlash => Some(BinaryOperator::FloorDiv),
        Token::StarStar => Some(BinaryOperator::Pow),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
