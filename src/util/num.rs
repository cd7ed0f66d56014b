use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// The largest magnitude an `i64` may have and still convert to `f64` without
/// rounding (`2^53 - 1`).
pub const MAX_EXACT_FLOAT_INT: u64 = (1 << f64::MANTISSA_DIGITS) - 1;

/// Converts an interpreter integer to a float, for mixed arithmetic and the
/// `int` to `float` cast.
///
/// ## Errors
/// Returns `RuntimeError::LiteralTooLarge` if the magnitude exceeds
/// [`MAX_EXACT_FLOAT_INT`].
///
/// ## Example
/// ```
/// use lexis::{
///     error::RuntimeError,
///     util::num::{MAX_EXACT_FLOAT_INT, int_to_float},
/// };
///
/// assert_eq!(int_to_float(-3, 1).unwrap(), -3.0);
///
/// let edge = MAX_EXACT_FLOAT_INT as i64;
/// assert!(int_to_float(edge, 1).is_ok());
/// assert!(matches!(int_to_float(edge + 1, 7), Err(RuntimeError::LiteralTooLarge { line: 7 })));
/// assert!(int_to_float(i64::MIN, 7).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub const fn int_to_float(value: i64, line: usize) -> EvalResult<f64> {
    if value.unsigned_abs() > MAX_EXACT_FLOAT_INT {
        return Err(RuntimeError::LiteralTooLarge { line });
    }
    Ok(value as f64)
}
