use log::trace;

use crate::{
    ast::Expr,
    interpreter::{
        environment::{Definition, Environment, MAX_CALL_DEPTH, MAX_CALLS},
        value::complex::{NAN, Number},
    },
};

/// Evaluates a call: arguments left to right, then the function bound to
/// `name` at the time of the call.
///
/// An unbound name evaluates to NaN.
#[must_use]
pub fn eval_call(name: &str, arguments: &[Expr], environment: &Environment<'_>) -> Number {
    let values = arguments.iter()
                          .map(|argument| argument.evaluate(environment))
                          .collect::<Vec<_>>();

    environment.lookup(name)
               .map_or(NAN, |definition| definition.call(environment, &values))
}

impl Definition {
    /// Invokes the definition with already evaluated arguments.
    ///
    /// A user-defined function runs in a fresh child scope of `environment`
    /// in which each parameter is bound to its argument. Parameters shadow
    /// outer bindings of the same name, and the outer scope is never
    /// modified.
    ///
    /// Constants, argument count mismatches and calls nested deeper than
    /// [`MAX_CALL_DEPTH`] yield the NaN sentinel. A user-defined call made
    /// from the root environment starts a fresh budget of [`MAX_CALLS`]
    /// calls, and every call past it yields NaN as well, so that branching
    /// recursion such as `f(x) := f(x) + f(x)` finishes.
    ///
    /// # Example
    /// ```
    /// use complexa::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{
    ///         environment::{Definition, Environment},
    ///         value::complex::Number,
    ///     },
    /// };
    ///
    /// let mut environment = Environment::new();
    /// environment.define_constant("a", Number::from(10.0));
    ///
    /// let body = Expr::binary(Expr::symbol("x"), BinaryOperator::Add, Expr::symbol("a"));
    /// let f = Definition::Custom { params: vec!["x".into()],
    ///                              body };
    ///
    /// assert_eq!(f.call(&environment, &[Number::from(5.0)]), Number::from(15.0));
    /// assert!(f.call(&environment, &[]).is_nan());
    /// ```
    #[must_use]
    pub fn call(&self, environment: &Environment<'_>, arguments: &[Number]) -> Number {
        match (self, arguments) {
            (Self::Native(function), [x]) => function(*x),
            (Self::Native2(function), [x, y]) => function(*x, *y),
            (Self::Custom { params, body }, _) if params.len() == arguments.len() => {
                if environment.depth() == 0 {
                    environment.reset_calls();
                }
                if environment.depth() >= MAX_CALL_DEPTH {
                    trace!("call depth {MAX_CALL_DEPTH} exceeded");
                    return NAN;
                }
                if !environment.charge_call() {
                    trace!("call budget of {MAX_CALLS} spent");
                    return NAN;
                }

                let mut scope = environment.scope();
                for (param, argument) in params.iter().zip(arguments) {
                    scope.define_constant(param.as_str(), *argument);
                }
                trace!("call scope at depth {}", scope.depth());

                body.evaluate(&scope)
            },
            _ => NAN,
        }
    }
}
