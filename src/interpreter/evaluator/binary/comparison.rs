use crate::interpreter::value::complex::{NAN, Number, ONE, ZERO};

/// `a = b`: the shared value when both operands are exactly equal, otherwise
/// the NaN sentinel.
///
/// # Example
/// ```
/// use complexa::interpreter::{evaluator::binary::comparison::equal, value::complex::Number};
///
/// assert_eq!(equal(Number::from(2.0), Number::from(2.0)), Number::from(2.0));
/// assert!(equal(Number::from(2.0), Number::from(3.0)).is_nan());
/// ```
#[must_use]
pub fn equal(left: Number, right: Number) -> Number {
    if left == right { left } else { NAN }
}

/// `a < b`: the left operand when both operands are real and it is smaller,
/// otherwise the NaN sentinel.
///
/// # Example
/// ```
/// use complexa::interpreter::{evaluator::binary::comparison::less, value::complex::Number};
///
/// assert_eq!(less(Number::from(1.0), Number::from(2.0)), Number::from(1.0));
/// assert!(less(Number::from(2.0), Number::from(1.0)).is_nan());
/// assert!(less(Number::new(3.0, 4.0), Number::from(5.0)).is_nan());
/// ```
#[must_use]
pub fn less(left: Number, right: Number) -> Number {
    if left.is_real() && right.is_real() && left.real < right.real {
        left
    } else {
        NAN
    }
}

/// The value of `name := value` as an expression: `1` when the symbol already
/// holds exactly `value`, `0` otherwise.
#[must_use]
pub fn definition_holds(current: Number, value: Number) -> Number {
    if current == value { ONE } else { ZERO }
}
