use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::Context, value::core::Value},
};

impl Context {
    /// Evaluates `and` and `or` on two already evaluated operands.
    ///
    /// Both sides are judged by truthiness; the result is `1` or `0`.
    ///
    /// # Example
    /// ```
    /// use sprig::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let yes = Value::from("text");
    /// let no = Value::Integer(0);
    ///
    /// assert_eq!(Context::eval_logic(BinaryOperator::And, &yes, &no), Value::Integer(0));
    /// assert_eq!(Context::eval_logic(BinaryOperator::Or, &yes, &no), Value::Integer(1));
    /// ```
    #[must_use]
    pub fn eval_logic(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        let holds = match op {
            BinaryOperator::And => left.is_truthy() && right.is_truthy(),
            _ => left.is_truthy() || right.is_truthy(),
        };
        Value::from(holds)
    }
}
