use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::binary::{
            comparison::{equal, less},
            power::power,
        },
        value::complex::Number,
    },
};

/// Applies a binary operator to two evaluated operands.
///
/// # Example
/// ```
/// use complexa::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::core::eval_binary, value::complex::Number},
/// };
///
/// let sum = eval_binary(BinaryOperator::Add, Number::new(1.0, 2.0), Number::from(3.0));
/// assert_eq!(sum, Number::new(4.0, 2.0));
///
/// let quotient = eval_binary(BinaryOperator::Div, Number::from(1.0), Number::from(0.0));
/// assert!(!quotient.real.is_finite());
/// ```
#[must_use]
pub fn eval_binary(op: BinaryOperator, left: Number, right: Number) -> Number {
    match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div => left / right,
        BinaryOperator::Pow => power(left, right),
        BinaryOperator::Equal => equal(left, right),
        BinaryOperator::Less => less(left, right),
    }
}
