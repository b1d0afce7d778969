use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Converts an integer to a real.
///
/// Integers beyond `2^53` lose precision, matching how mixed arithmetic
/// promotes its integer operand.
///
/// ## Example
/// ```
/// use sprig::util::num::int_to_real;
///
/// assert_eq!(int_to_real(42), 42.0);
/// assert_eq!(int_to_real(-7), -7.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn int_to_real(value: i64) -> f64 {
    value as f64
}

/// Raises an integer to a non-negative integer power, failing on overflow.
///
/// Exponents that do not fit in a `u32` only succeed for the bases whose
/// powers stay bounded: `0`, `1` and `-1`.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the result does not fit in an `i64`.
///
/// ## Example
/// ```
/// use sprig::{error::RuntimeError, util::num::checked_int_pow};
///
/// assert_eq!(checked_int_pow(2, 10, 1).unwrap(), 1024);
/// assert_eq!(checked_int_pow(-1, 1 << 40, 1).unwrap(), 1);
///
/// let err = checked_int_pow(10, 40, 3).unwrap_err();
/// assert!(matches!(err, RuntimeError::Overflow { line: 3 }));
/// ```
pub fn checked_int_pow(base: i64, exponent: i64, line: usize) -> EvalResult<i64> {
    debug_assert!(exponent >= 0);

    if let Ok(exponent) = u32::try_from(exponent) {
        return base.checked_pow(exponent)
                   .ok_or(RuntimeError::Overflow { line });
    }

    match base {
        0 | 1 => Ok(base),
        -1 => Ok(if exponent % 2 == 0 { 1 } else { -1 }),
        _ => Err(RuntimeError::Overflow { line }),
    }
}

/// Integer division rounding toward negative infinity.
///
/// ## Errors
/// - `RuntimeError::DivisionByZero` if `divisor` is zero.
/// - `RuntimeError::Overflow` for `i64::MIN // -1`.
///
/// ## Example
/// ```
/// use sprig::util::num::floor_div;
///
/// assert_eq!(floor_div(7, 2, 1).unwrap(), 3);
/// assert_eq!(floor_div(-7, 2, 1).unwrap(), -4);
/// assert_eq!(floor_div(7, -2, 1).unwrap(), -4);
/// assert!(floor_div(1, 0, 1).is_err());
/// ```
pub fn floor_div(dividend: i64, divisor: i64, line: usize) -> EvalResult<i64> {
    if divisor == 0 {
        return Err(RuntimeError::DivisionByZero { line });
    }
    let quotient = dividend.checked_div(divisor)
                           .ok_or(RuntimeError::Overflow { line })?;

    if dividend % divisor != 0 && (dividend < 0) != (divisor < 0) {
        Ok(quotient - 1)
    } else {
        Ok(quotient)
    }
}

/// Integer remainder whose sign follows the divisor.
///
/// ## Errors
/// Returns `RuntimeError::DivisionByZero` if `divisor` is zero.
///
/// ## Example
/// ```
/// use sprig::util::num::floor_mod;
///
/// assert_eq!(floor_mod(7, 3, 1).unwrap(), 1);
/// assert_eq!(floor_mod(-7, 3, 1).unwrap(), 2);
/// assert_eq!(floor_mod(7, -3, 1).unwrap(), -2);
/// ```
pub const fn floor_mod(dividend: i64, divisor: i64, line: usize) -> EvalResult<i64> {
    if divisor == 0 {
        return Err(RuntimeError::DivisionByZero { line });
    }
    let remainder = dividend.wrapping_rem(divisor);

    if remainder != 0 && (remainder < 0) != (divisor < 0) {
        Ok(remainder + divisor)
    } else {
        Ok(remainder)
    }
}

/// Real remainder whose sign follows the divisor.
///
/// ## Errors
/// Returns `RuntimeError::DivisionByZero` if `divisor` is zero.
///
/// ## Example
/// ```
/// use sprig::util::num::floor_mod_real;
///
/// assert_eq!(floor_mod_real(-1.5, 1.0, 1).unwrap(), 0.5);
/// assert_eq!(floor_mod_real(5.5, -2.0, 1).unwrap(), -0.5);
/// ```
pub fn floor_mod_real(dividend: f64, divisor: f64, line: usize) -> EvalResult<f64> {
    if divisor == 0.0 {
        return Err(RuntimeError::DivisionByZero { line });
    }
    let remainder = dividend % divisor;

    if remainder != 0.0 && (remainder < 0.0) != (divisor < 0.0) {
        Ok(remainder + divisor)
    } else {
        Ok(remainder)
    }
}

/// Turns a possibly negative list index into a position inside a list of
/// length `len`.
///
/// Negative indices count back from the end, so `-1` is the last element.
///
/// ## Errors
/// Returns `RuntimeError::IndexOutOfBounds` if the index falls outside the
/// list after adjustment.
///
/// ## Example
/// ```
/// use sprig::{error::RuntimeError, util::num::resolve_index};
///
/// assert_eq!(resolve_index(0, 3, 1).unwrap(), 0);
/// assert_eq!(resolve_index(-1, 3, 1).unwrap(), 2);
///
/// let err = resolve_index(3, 3, 9).unwrap_err();
/// assert!(matches!(err, RuntimeError::IndexOutOfBounds { index: 3, len: 3, line: 9 }));
/// ```
pub fn resolve_index(index: i64, len: usize, line: usize) -> EvalResult<usize> {
    let out_of_bounds = || RuntimeError::IndexOutOfBounds { index, len, line };

    let position = if index < 0 {
        let back = usize::try_from(index.unsigned_abs()).map_err(|_| out_of_bounds())?;
        len.checked_sub(back).ok_or_else(out_of_bounds)?
    } else {
        usize::try_from(index).map_err(|_| out_of_bounds())?
    };

    if position < len {
        Ok(position)
    } else {
        Err(out_of_bounds())
    }
}

/// Converts a repetition count to a `usize`, treating negative counts as
/// zero.
///
/// ## Example
/// ```
/// use sprig::util::num::repeat_count;
///
/// assert_eq!(repeat_count(3), 3);
/// assert_eq!(repeat_count(-2), 0);
/// ```
#[must_use]
pub fn repeat_count(count: i64) -> usize {
    usize::try_from(count).unwrap_or(0)
}
