use std::{cmp::Ordering, rc::Rc};

use ordered_float::OrderedFloat;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::core::type_mismatch,
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
    util::num::int_to_real,
};

impl Context {
    /// Evaluates a relational operator.
    ///
    /// `==` and `<>` accept any pair of values. The ordering operators accept
    /// two numbers, two texts or two lists and fail on anything else.
    ///
    /// # Parameters
    /// - `op`: One of `< <= == <> > >=`.
    /// - `left`, `right`: The operands.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// `Value::Integer(1)` if the comparison holds, `Value::Integer(0)`
    /// otherwise.
    pub(super) fn eval_comparison(op: BinaryOperator,
                                  left: &Value,
                                  right: &Value,
                                  line: usize)
                                  -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        let holds = match op {
            Equal => values_equal(left, right),
            NotEqual => !values_equal(left, right),
            _ => {
                let ordering = compare(left, right).ok_or_else(|| {
                                                        type_mismatch(op, left, right, line)
                                                    })?;
                match op {
                    Less => ordering.is_lt(),
                    LessEqual => ordering.is_le(),
                    Greater => ordering.is_gt(),
                    GreaterEqual => ordering.is_ge(),
                    _ => return Err(type_mismatch(op, left, right, line)),
                }
            },
        };
        Ok(Value::from(holds))
    }
}

/// Language-level equality.
///
/// Integers and reals compare by numeric value, lists compare element by
/// element, and values of different kinds are never equal. A list is always
/// equal to itself, even one that contains itself.
///
/// # Example
/// ```
/// use sprig::interpreter::{evaluator::binary::comparison::values_equal, value::core::Value};
///
/// assert!(values_equal(&Value::Integer(2), &Value::Real(2.0)));
/// assert!(!values_equal(&Value::Integer(2), &Value::from("2")));
/// ```
#[must_use]
pub fn values_equal(left: &Value, right: &Value) -> bool {
    use Value::{Callable, Integer, List, Real, Text, Unit};

    match (left, right) {
        (Integer(a), Integer(b)) => a == b,
        (Integer(a), Real(b)) | (Real(b), Integer(a)) => int_to_real(*a) == *b,
        (Real(a), Real(b)) => a == b,
        (Text(a), Text(b)) => a == b,
        (List(a), List(b)) if Rc::ptr_eq(a, b) => true,
        (List(a), List(b)) => {
            let (a, b) = (a.borrow(), b.borrow());
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| values_equal(x, y))
        },
        (Callable(a), Callable(b)) => a == b,
        (Unit, Unit) => true,
        _ => false,
    }
}

/// Orders two values, or returns `None` if they cannot be ordered.
///
/// Numbers use a total order in which `NaN` sorts above every other real.
/// Texts order lexicographically by character, and lists order
/// lexicographically by element.
fn compare(left: &Value, right: &Value) -> Option<Ordering> {
    use Value::{Integer, List, Real, Text};

    match (left, right) {
        (Integer(a), Integer(b)) => Some(a.cmp(b)),
        (Integer(a), Real(b)) => Some(OrderedFloat(int_to_real(*a)).cmp(&OrderedFloat(*b))),
        (Real(a), Integer(b)) => Some(OrderedFloat(*a).cmp(&OrderedFloat(int_to_real(*b)))),
        (Real(a), Real(b)) => Some(OrderedFloat(*a).cmp(&OrderedFloat(*b))),
        (Text(a), Text(b)) => Some(a.cmp(b)),
        (List(a), List(b)) if Rc::ptr_eq(a, b) => Some(Ordering::Equal),
        (List(a), List(b)) => {
            let (a, b) = (a.borrow(), b.borrow());
            for (x, y) in a.iter().zip(b.iter()) {
                match compare(x, y)? {
                    Ordering::Equal => {},
                    unequal => return Some(unequal),
                }
            }
            Some(a.len().cmp(&b.len()))
        },
        _ => None,
    }
}
