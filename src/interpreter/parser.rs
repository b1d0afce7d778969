/// Parsing of binary operator tiers.
///
/// One function per precedence layer, from `or` down to `* /`. Every layer is
/// left-associative.
pub mod binary;
/// Parsing of blocks and the statements inside them.
pub mod block;
/// Entry points: whole programs, expressions and the assignment layer.
pub mod core;
/// Parsing of `not`, indexing and primary expressions.
///
/// Primary expressions include literals, list literals, blocks, parenthesized
/// expressions and every form that starts with an identifier: variables,
/// calls and the one- and two-block special forms.
pub mod unary;
/// Helper functions shared by the parser submodules.
pub mod utils;
