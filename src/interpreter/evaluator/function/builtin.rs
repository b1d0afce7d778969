use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::check_arity,
        },
        value::core::Value,
    },
};

/// Prints a value to the context's output and returns `Unit`.
///
/// Accepts exactly one argument, written in its display form followed by a
/// newline. Text is printed with its quotes.
///
/// # Parameters
/// - `context`: Owner of the output sink.
/// - `args`: Slice containing one argument.
/// - `line`: Line number for error reporting.
///
/// # Example
/// ```
/// use sprig::interpreter::{
///     evaluator::{core::Context, function::builtin::print},
///     value::core::Value,
/// };
///
/// let mut context = Context::with_output(Vec::new());
/// let result = print(&mut context, &[Value::Integer(42)], 1).unwrap();
///
/// assert_eq!(result, Value::Unit);
/// ```
pub fn print(context: &mut Context, args: &[Value], line: usize) -> EvalResult<Value> {
    let [value] = check_arity::<1>("print", args, line)?;

    context.write_line(value, line)?;
    Ok(Value::Unit)
}

/// Adds two values with the semantics of `+`.
///
/// # Example
/// ```
/// use sprig::interpreter::{
///     evaluator::{core::Context, function::builtin::add},
///     value::core::Value,
/// };
///
/// let mut context = Context::new();
/// let sum = add(&mut context, &[Value::from("ab"), Value::from("cd")], 1).unwrap();
///
/// assert_eq!(sum, Value::from("abcd"));
/// ```
pub fn add(_context: &mut Context, args: &[Value], line: usize) -> EvalResult<Value> {
    let [left, right] = check_arity::<2>("add", args, line)?;

    Context::eval_binary(BinaryOperator::Add, left, right, line)
}
