use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{comparison::values_equal, core::type_mismatch},
            core::{Context, EvalResult},
            utils::first_index,
        },
        value::core::{ListRef, Value},
    },
    util::num::{repeat_count, resolve_index},
};

impl Context {
    /// Evaluates `+`.
    ///
    /// Text joins text and lists join lists, producing a new value in both
    /// cases. Numbers are added.
    pub(super) fn eval_add(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        match (left, right) {
            (Value::Text(a), Value::Text(b)) => Ok(Value::Text(format!("{a}{b}"))),
            (Value::List(a), Value::List(b)) => {
                let joined = a.borrow()
                              .iter()
                              .chain(b.borrow().iter())
                              .cloned()
                              .collect::<Vec<_>>();
                Ok(Value::from(joined))
            },
            _ => Self::eval_arithmetic(BinaryOperator::Add, left, right, line),
        }
    }

    /// Evaluates `*`.
    ///
    /// Text or a list times an integer, in either order, repeats it. A count
    /// of zero or less gives an empty result. Numbers are multiplied.
    pub(super) fn eval_mul(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        match (left, right) {
            (Value::Text(s), Value::Integer(n)) | (Value::Integer(n), Value::Text(s)) => {
                repeat_text(s, repeat_count(*n), line)
            },
            (Value::List(items), Value::Integer(n)) | (Value::Integer(n), Value::List(items)) => {
                repeat_list(items, repeat_count(*n), line)
            },
            _ => Self::eval_arithmetic(BinaryOperator::Mul, left, right, line),
        }
    }

    /// Evaluates `in`.
    ///
    /// A value is in a list if it equals one of its elements under `==`.
    /// Text is in text if it is a substring of it.
    pub(super) fn eval_membership(left: &Value,
                                  right: &Value,
                                  line: usize)
                                  -> EvalResult<Value> {
        match (left, right) {
            (needle, Value::List(items)) => {
                Ok(Value::from(items.borrow().iter().any(|item| values_equal(needle, item))))
            },
            (Value::Text(needle), Value::Text(haystack)) => {
                Ok(Value::from(haystack.contains(needle.as_str())))
            },
            _ => Err(type_mismatch(BinaryOperator::In, left, right, line)),
        }
    }

    /// Evaluates indexing.
    ///
    /// The right operand is the evaluated index bracket. Its first element
    /// selects the list element, and negative indices count from the end.
    pub(super) fn eval_index(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        let Value::List(items) = left else {
            return Err(type_mismatch(BinaryOperator::Index, left, right, line));
        };
        let index = first_index(right, line)?;

        let items = items.borrow();
        let position = resolve_index(index, items.len(), line)?;
        Ok(items[position].clone())
    }
}

/// Repeats `text` `count` times.
///
/// The whole result is reserved up front, so a size that cannot be
/// allocated is reported as `Overflow` instead of aborting.
fn repeat_text(text: &str, count: usize, line: usize) -> EvalResult<Value> {
    let total = text.len()
                    .checked_mul(count)
                    .ok_or(RuntimeError::Overflow { line })?;

    let mut repeated = String::new();
    if total == 0 {
        return Ok(Value::Text(repeated));
    }
    repeated.try_reserve_exact(total)
            .map_err(|_| RuntimeError::Overflow { line })?;
    for _ in 0..count {
        repeated.push_str(text);
    }
    Ok(Value::Text(repeated))
}

fn repeat_list(items: &ListRef, count: usize, line: usize) -> EvalResult<Value> {
    let items = items.borrow();
    let total = items.len()
                     .checked_mul(count)
                     .ok_or(RuntimeError::Overflow { line })?;

    let mut repeated = Vec::new();
    if total == 0 {
        return Ok(Value::from(repeated));
    }
    repeated.try_reserve_exact(total)
            .map_err(|_| RuntimeError::Overflow { line })?;
    for _ in 0..count {
        repeated.extend(items.iter().cloned());
    }
    Ok(Value::from(repeated))
}
