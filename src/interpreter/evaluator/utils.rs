use tracing::trace;

use crate::{
    ast::{Block, Expr, Name},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            scope::ScopeId,
        },
        value::core::Value,
    },
};

impl Context {
    /// Looks up a variable by name.
    ///
    /// The search starts in `scope` and walks up through its ancestors to the
    /// root. If the name is bound nowhere, an `UnknownVariable` error is
    /// returned.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    /// - `line`: Line number for error reporting.
    /// - `scope`: Frame the search starts in.
    ///
    /// # Returns
    /// A copy of the bound value. Lists are shared, not deep-copied.
    ///
    /// # Example
    /// ```
    /// use sprig::{ast::Name, interpreter::evaluator::core::Context};
    ///
    /// let context = Context::new();
    /// let root = context.root();
    ///
    /// assert!(context.eval_variable(&Name::simple("print"), 1, root).is_ok());
    /// assert!(context.eval_variable(&Name::simple("x"), 1, root).is_err());
    /// ```
    pub fn eval_variable(&self, name: &Name, line: usize, scope: ScopeId) -> EvalResult<Value> {
        self.scopes()
            .lookup(scope, name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }

    /// Evaluates the elements of a list literal left to right into a new
    /// list.
    pub(crate) fn eval_list(&mut self, elements: &[Expr], scope: ScopeId) -> EvalResult<Value> {
        let values = elements.iter()
                             .map(|element| self.eval(element, scope))
                             .collect::<EvalResult<Vec<_>>>()?;
        Ok(Value::from(values))
    }

    /// Evaluates a block in its own frame.
    ///
    /// The frame is allocated on the first evaluation and reused afterwards.
    /// Every evaluation points it at `scope` before running the statements,
    /// so bindings made on one entry are still there on the next.
    ///
    /// # Returns
    /// The value of the last statement, or `Value::Unit` for an empty block.
    pub(crate) fn eval_block(&mut self, block: &Block, scope: ScopeId) -> EvalResult<Value> {
        let frame = self.block_frame_or_init(block, scope);
        self.scopes_mut().reparent(frame, scope);
        trace!(line = block.line, statements = block.statements.len(), "entering block");

        let mut result = Value::Unit;
        for statement in &block.statements {
            result = self.eval(statement, frame)?;
        }
        Ok(result)
    }
}

/// Checks that a builtin received exactly `N` arguments.
///
/// # Parameters
/// - `name`: The builtin's name, for the error message.
/// - `args`: The evaluated arguments.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The arguments as a fixed-size array, ready to destructure.
///
/// # Example
/// ```
/// use sprig::interpreter::{evaluator::utils::check_arity, value::core::Value};
///
/// let args = [Value::Integer(1), Value::Integer(2)];
/// let [a, b] = check_arity::<2>("add", &args, 1).unwrap();
///
/// assert_eq!((a, b), (&Value::Integer(1), &Value::Integer(2)));
/// assert!(check_arity::<1>("print", &args, 1).is_err());
/// ```
pub fn check_arity<'v, const N: usize>(name: &str,
                                      args: &'v [Value],
                                      line: usize)
                                      -> EvalResult<&'v [Value; N]> {
    args.try_into()
        .map_err(|_| RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                           expected: N,
                                                           found: args.len(),
                                                           line })
}

/// Reads the index selected by an index bracket.
///
/// The bracket evaluates to a list; its first element must be an integer.
/// Any later elements have already been evaluated and are ignored.
///
/// # Errors
/// - `MissingIndex` if the bracket was empty.
/// - `ExpectedInteger` if the first element is not an integer.
pub(crate) fn first_index(bracket: &Value, line: usize) -> EvalResult<i64> {
    let items = bracket.as_list(line)?;
    let items = items.borrow();
    items.first()
         .ok_or(RuntimeError::MissingIndex { line })?
         .as_integer(line)
}
