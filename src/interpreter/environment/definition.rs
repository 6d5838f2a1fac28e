use crate::{ast::Expr, interpreter::value::complex::Number};

/// A native function of one argument.
pub type UnaryFn = fn(Number) -> Number;
/// A native function of two arguments.
pub type BinaryFn = fn(Number, Number) -> Number;

/// An entry in an [`Environment`](super::Environment).
#[derive(Debug, Clone)]
pub enum Definition {
    /// A numeric constant. Redefining the name replaces the value.
    Constant(Number),
    /// A native function of one argument, e.g. `sin`.
    Native(UnaryFn),
    /// A native function of two arguments, e.g. `polar`.
    Native2(BinaryFn),
    /// A user-defined function.
    Custom {
        /// Parameter names, bound positionally to the call arguments.
        params: Vec<String>,
        /// The body, evaluated in a fresh scope per call.
        body:   Expr,
    },
}

impl Definition {
    /// Returns `true` for every kind of function.
    #[must_use]
    pub const fn is_function(&self) -> bool {
        !matches!(self, Self::Constant(_))
    }

    /// Returns the number of arguments a call must supply, or `None` for a
    /// constant.
    #[must_use]
    pub fn arity(&self) -> Option<usize> {
        match self {
            Self::Constant(_) => None,
            Self::Native(_) => Some(1),
            Self::Native2(_) => Some(2),
            Self::Custom { params, .. } => Some(params.len()),
        }
    }

    /// Renders the definition as it is listed by a symbol dump.
    ///
    /// # Example
    /// ```
    /// use complexa::{
    ///     ast::Expr,
    ///     interpreter::{environment::Definition, value::complex::Number},
    /// };
    ///
    /// assert_eq!(Definition::Constant(Number::new(0.0, 1.0)).describe("i"), "i");
    /// assert_eq!(Definition::Native(|x| x).describe("id"), "id(x) = native");
    ///
    /// let square = Definition::Custom { params: vec!["x".into()],
    ///                                   body:   Expr::symbol("x"), };
    /// assert_eq!(square.describe("f"), "f(x) = x");
    /// ```
    #[must_use]
    pub fn describe(&self, name: &str) -> String {
        match self {
            Self::Constant(value) => value.to_string(),
            Self::Native(_) => format!("{name}(x) = native"),
            Self::Native2(_) => format!("{name}(x, y) = native"),
            Self::Custom { params, body } => format!("{name}({}) = {body}", params.join(", ")),
        }
    }
}
