/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the tree against a chain of scope frames, applies the
/// operator tables and dispatches calls and block forms to the builtins
/// installed in the root scope.
///
/// # Responsibilities
/// - Evaluates every AST node kind against a scope handle.
/// - Owns the scope arena and applies the read and write rules.
/// - Reports runtime errors such as unknown names or bad operand kinds.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens: literals, identifiers, operators and punctuation. Whitespace and
/// both comment forms are skipped, and every token is tagged with its line.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive descent over the precedence ladder, from
/// assignment down to indexing and primary expressions. A whole program is
/// one expression.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Integers, reals, text, shared lists, builtin callables and the unit value,
/// together with truthiness and the printed representation.
pub mod value;
