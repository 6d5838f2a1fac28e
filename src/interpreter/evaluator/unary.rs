use crate::{
    interpreter::value::complex::{NAN, Number, ONE},
    util::num::f64_to_u32_checked,
};

/// The largest argument whose factorial is finite.
pub const MAX_FACTORIAL: u32 = 170;

/// Computes `n!` as the product `1 * 2 * ... * n`.
///
/// Only non-negative integers with a zero imaginary part have a factorial.
/// Every other input (negative, fractional, complex, NaN or infinite) yields
/// the NaN sentinel. Integers above [`MAX_FACTORIAL`] yield `+∞` without
/// running the product.
///
/// # Example
/// ```
/// use complexa::interpreter::{evaluator::unary::factorial, value::complex::Number};
///
/// assert_eq!(factorial(Number::from(0.0)), Number::from(1.0));
/// assert_eq!(factorial(Number::from(5.0)), Number::from(120.0));
/// assert!(factorial(Number::from(2.5)).is_nan());
/// assert!(factorial(Number::from(-1.0)).is_nan());
/// assert_eq!(factorial(Number::from(1000.0)), Number::from(f64::INFINITY));
/// ```
#[must_use]
pub fn factorial(n: Number) -> Number {
    if !n.is_real() {
        return NAN;
    }
    if n.real > f64::from(MAX_FACTORIAL) && n.real.fract() == 0.0 {
        return Number::from(f64::INFINITY);
    }
    let Some(n) = f64_to_u32_checked(n.real) else {
        return NAN;
    };

    (1..=n).fold(ONE, |product, i| product * Number::from(i))
}
