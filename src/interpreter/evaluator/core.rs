use crate::{
    ast::Expr,
    interpreter::{
        environment::{Definition, Environment},
        evaluator::{
            binary::{comparison::definition_holds, core::eval_binary},
            function::eval_call,
            unary::factorial,
        },
        value::complex::Number,
    },
};

impl Expr {
    /// Evaluates the expression against `environment`.
    ///
    /// Evaluation never fails. Operations without a defined result (division
    /// by zero, comparisons of complex numbers, factorials of non-integers,
    /// calls with the wrong number of arguments) produce NaN components
    /// instead.
    ///
    /// A `name := value` node does not bind anything; it evaluates to `1` if
    /// `name` already equals `value` and `0` otherwise. Binding is left to the
    /// caller (see [`Session`](crate::session::Session)).
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::{
    ///     environment::{Environment, Fallback},
    ///     parser::core::parse,
    ///     value::complex::Number,
    /// };
    ///
    /// let environment = Environment::with_prelude(Fallback::Nan);
    /// let expr = parse("2^3^2", &environment).unwrap();
    /// assert_eq!(expr.evaluate(&environment), Number::from(512.0));
    /// ```
    #[must_use]
    pub fn evaluate(&self, environment: &Environment<'_>) -> Number {
        match self {
            Self::Number { value } => *value,
            Self::Symbol { name } => eval_symbol(name, environment),
            Self::Negate { expr } => -expr.evaluate(environment),
            Self::Factorial { expr } => factorial(expr.evaluate(environment)),
            Self::BinaryOp { left, op, right } => {
                let left = left.evaluate(environment);
                let right = right.evaluate(environment);
                eval_binary(*op, left, right)
            },
            Self::Define { name, value } => {
                let current = eval_symbol(name, environment);
                let value = value.evaluate(environment);
                definition_holds(current, value)
            },
            Self::Call { name, arguments } => eval_call(name, arguments, environment),
        }
    }
}

/// Resolves a symbol through the scope chain on every evaluation.
///
/// Names that are unbound, or bound to a function, yield the environment's
/// fallback value.
#[must_use]
pub fn eval_symbol(name: &str, environment: &Environment<'_>) -> Number {
    match environment.lookup(name) {
        Some(Definition::Constant(value)) => *value,
        _ => environment.fallback().value(),
    }
}
