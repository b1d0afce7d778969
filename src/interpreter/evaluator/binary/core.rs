use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// This function routes the operation to specialized handlers depending on
    /// the operator. `+` and `*` go through the sequence handlers first, since
    /// they also concatenate and repeat text and lists. The remaining
    /// arithmetic operators are numeric only. Comparisons and `in` produce the
    /// integers `0` and `1`, as do `and` and `or`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use sprig::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let left = Value::Integer(3);
    /// let right = Value::Integer(4);
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &left, &right, 1);
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    ///
    /// let result = Context::eval_binary(BinaryOperator::Less, &left, &right, 1);
    /// assert_eq!(result.unwrap(), Value::Integer(1));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, FloorDiv, Greater, GreaterEqual, In, Index, Less, LessEqual,
            Mod, Mul, NotEqual, Or, Pow, Sub,
        };

        match op {
            Add => Self::eval_add(left, right, line),
            Mul => Self::eval_mul(left, right, line),
            Sub | Div | FloorDiv | Mod | Pow => Self::eval_arithmetic(op, left, right, line),
            Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
                Self::eval_comparison(op, left, right, line)
            },
            In => Self::eval_membership(left, right, line),
            And | Or => Ok(Self::eval_logic(op, left, right)),
            Index => Self::eval_index(left, right, line),
        }
    }
}

/// Builds the error for an operator applied to operand kinds it does not
/// support.
pub(super) fn type_mismatch(op: BinaryOperator,
                            left: &Value,
                            right: &Value,
                            line: usize)
                            -> RuntimeError {
    RuntimeError::TypeMismatch { details: format!("cannot apply '{op}' to {} and {}",
                                                  left.type_name(),
                                                  right.type_name()),
                                 line }
}
