use crate::{
    ast::UnaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a unary operator on an already evaluated operand.
    ///
    /// `not` negates the operand's truthiness and yields `1` or `0`.
    ///
    /// # Parameters
    /// - `op`: The unary operator.
    /// - `operand`: The value to apply it to.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use sprig::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let negated = Context::eval_unary(UnaryOperator::Not, &Value::Unit, 1).unwrap();
    /// assert_eq!(negated, Value::Integer(1));
    /// ```
    #[allow(clippy::unnecessary_wraps)]
    pub fn eval_unary(op: UnaryOperator, operand: &Value, _line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Not => Ok(Value::from(!operand.is_truthy())),
        }
    }
}
