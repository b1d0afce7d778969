/// Assignment targets.
///
/// Resolves the left-hand side of an assignment into a setter before the
/// right-hand side runs, then applies the write once the value is known.
pub mod assignment;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, text and list operations, comparisons, membership,
/// the logical operators and indexing.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the runtime context, the per-node dispatch and the result type
/// shared by the evaluator.
pub mod core;

/// Builtin functions and special forms.
///
/// Defines the dispatch table installed into every root scope, the plain
/// functions `print` and `add`, and the block forms `if`, `if/else` and
/// `while`.
pub mod function;

/// The scope arena and its read and write rules.
pub mod scope;

/// Unary operator evaluation logic.
pub mod unary;

/// Utility functions for evaluation.
///
/// Provides block and list evaluation, variable reads and the argument count
/// check used by builtins.
pub mod utils;
