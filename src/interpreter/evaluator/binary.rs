/// Numeric arithmetic on integers and reals.
pub mod arithmetic;
/// Equality and ordering comparisons.
pub mod comparison;
/// Operator dispatch.
pub mod core;
/// `and` and `or`.
pub mod logic;
/// Operators on text and lists: concatenation, repetition, membership and
/// indexing.
pub mod sequence;
