use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::core::type_mismatch,
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
    util::num::{checked_int_pow, floor_div, floor_mod, floor_mod_real, int_to_real},
};

impl Context {
    /// Evaluates a numeric operator.
    ///
    /// Two integers stay integers, except under `/`, which always yields a
    /// real. A mix of integer and real promotes the integer. Any other
    /// operand kind is a type mismatch.
    ///
    /// # Parameters
    /// - `op`: One of `+ - * / // % **`.
    /// - `left`, `right`: The operands.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use sprig::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let seven = Value::Integer(7);
    /// let two = Value::Integer(2);
    ///
    /// let quotient = Context::eval_arithmetic(BinaryOperator::Div, &seven, &two, 1);
    /// assert_eq!(quotient.unwrap(), Value::Real(3.5));
    ///
    /// let floored = Context::eval_arithmetic(BinaryOperator::FloorDiv, &seven, &two, 1);
    /// assert_eq!(floored.unwrap(), Value::Integer(3));
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use Value::{Integer, Real};

        match (left, right) {
            (Integer(a), Integer(b)) => eval_integer_op(op, *a, *b, line),
            (Integer(a), Real(b)) => eval_real_op(op, int_to_real(*a), *b, line),
            (Real(a), Integer(b)) => eval_real_op(op, *a, int_to_real(*b), line),
            (Real(a), Real(b)) => eval_real_op(op, *a, *b, line),
            _ => Err(type_mismatch(op, left, right, line)),
        }
    }
}

fn eval_integer_op(op: BinaryOperator, a: i64, b: i64, line: usize) -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, FloorDiv, Mod, Mul, Pow, Sub};

    let overflow = RuntimeError::Overflow { line };
    match op {
        Add => a.checked_add(b).map(Value::Integer).ok_or(overflow),
        Sub => a.checked_sub(b).map(Value::Integer).ok_or(overflow),
        Mul => a.checked_mul(b).map(Value::Integer).ok_or(overflow),
        Div => eval_real_op(Div, int_to_real(a), int_to_real(b), line),
        FloorDiv => floor_div(a, b, line).map(Value::Integer),
        Mod => floor_mod(a, b, line).map(Value::Integer),
        Pow if b >= 0 => checked_int_pow(a, b, line).map(Value::Integer),
        Pow => eval_real_op(Pow, int_to_real(a), int_to_real(b), line),
        _ => Err(type_mismatch(op, &Value::Integer(a), &Value::Integer(b), line)),
    }
}

fn eval_real_op(op: BinaryOperator, a: f64, b: f64, line: usize) -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, FloorDiv, Mod, Mul, Pow, Sub};

    let result = match op {
        Add => a + b,
        Sub => a - b,
        Mul => a * b,
        Div | FloorDiv if b == 0.0 => return Err(RuntimeError::DivisionByZero { line }),
        Div => a / b,
        FloorDiv => (a / b).floor(),
        Mod => floor_mod_real(a, b, line)?,
        Pow if a == 0.0 && b < 0.0 => return Err(RuntimeError::DivisionByZero { line }),
        Pow => a.powf(b),
        _ => return Err(type_mismatch(op, &Value::Real(a), &Value::Real(b), line)),
    };
    Ok(Value::Real(result))
}
