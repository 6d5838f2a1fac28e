use std::f64::consts::E;

use crate::interpreter::value::complex::Number;

/// Raises `base` to `exponent`.
///
/// A real base exactly equal to `e` goes through the complex exponential, so
/// that `e^x` and `exp(x)` agree bit for bit. Every other base uses
/// [`Number::pow`].
///
/// # Example
/// ```
/// use std::f64::consts::E;
///
/// use complexa::interpreter::{evaluator::binary::power::power, value::complex::Number};
///
/// let x = Number::new(0.5, 2.0);
/// assert_eq!(power(Number::from(E), x), x.exp());
/// assert_eq!(power(Number::from(2.0), Number::from(10.0)), Number::from(1024.0));
/// ```
#[must_use]
pub fn power(base: Number, exponent: Number) -> Number {
    if base.is_real() && base.real == E {
        exponent.exp()
    } else {
        base.pow(exponent)
    }
}
