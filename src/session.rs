use std::fmt;

use log::debug;

use crate::{
    ast::{Expr, FunctionDef, Statement},
    error::ParseError,
    interpreter::{
        environment::{Environment, Fallback},
        parser::statement::{parse_statement, parse_statement_strict},
        value::complex::Number,
    },
};

/// The command list printed for `?`.
pub const HELP: &str = "Valid input:
?                  prints this help
vars               prints all defined symbols
EXPR               evaluates the given expression
SYM := EXPR        defines a constant by the given expression, e.g. a := 3
SYM := nan         removes the definition of SYM
F(X, ...) := EXPR  defines a function, e.g. f(x) := x^2 + 1
quit               exits the program";

/// Settings that apply to a whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionOptions {
    /// What symbols that are not defined evaluate to.
    pub fallback: Fallback,
    /// Reject input that mentions symbols that are not defined.
    pub strict:   bool,
}

/// The result of running one line of input.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// An expression and its value.
    Value {
        /// The parsed expression.
        expr:  Expr,
        /// Its value.
        value: Number,
    },
    /// A constant was bound by `name := value`.
    Defined {
        /// The definition as parsed.
        expr:  Expr,
        /// The value now bound to the name.
        value: Number,
    },
    /// A constant was removed because its new value is NaN.
    Undefined {
        /// The definition as parsed.
        expr: Expr,
    },
    /// A user-defined function was bound.
    FunctionDefined(FunctionDef),
    /// Every binding of the session, ordered by name, as `(name, rendering)`.
    Symbols(Vec<(String, String)>),
    /// The input was `?`.
    Help,
    /// The input was `quit`.
    Quit,
    /// The input was blank.
    Empty,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value { expr, value } => write!(f, "{expr} = {value}"),
            Self::Defined { expr, .. } => write!(f, "define {expr}"),
            Self::Undefined { expr } => write!(f, "undefine {expr}"),
            Self::FunctionDefined(function) => write!(f, "define {function}"),
            Self::Symbols(symbols) => {
                for (i, (name, rendering)) in symbols.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{name} = {rendering}")?;
                }
                Ok(())
            },
            Self::Help => f.write_str(HELP),
            Self::Quit => f.write_str("Bye."),
            Self::Empty => Ok(()),
        }
    }
}

/// A long-lived root environment fed one line at a time.
///
/// The session applies the side effects that evaluation itself never has:
/// `name := value` binds `name` to the value of the right-hand side, or
/// removes the binding when that value is NaN, and `f(x) := body` binds a
/// function.
///
/// # Example
/// ```
/// use complexa::session::{Outcome, Session, SessionOptions};
///
/// let mut session = Session::new(SessionOptions::default());
///
/// let outcome = session.run("a := 3").unwrap();
/// assert_eq!(outcome.to_string(), "define a := 3");
///
/// let outcome = session.run("a * 2").unwrap();
/// assert_eq!(outcome.to_string(), "a * 2 = 6");
///
/// let outcome = session.run("a := nan").unwrap();
/// assert_eq!(outcome.to_string(), "undefine a := nan");
/// assert!(session.environment().lookup("a").is_none());
/// ```
#[derive(Debug)]
pub struct Session {
    environment: Environment<'static>,
    strict:      bool,
}

impl Session {
    /// Creates a session whose environment holds the standard prelude.
    #[must_use]
    pub fn new(options: SessionOptions) -> Self {
        Self { environment: Environment::with_prelude(options.fallback),
               strict:      options.strict, }
    }

    /// Returns the root environment.
    #[must_use]
    pub const fn environment(&self) -> &Environment<'static> {
        &self.environment
    }

    /// Returns the root environment for direct modification, e.g. to add
    /// native functions.
    pub const fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.environment
    }

    /// Runs one line of input.
    ///
    /// The commands `?`, `vars` and `quit` are recognized before parsing.
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns the [`ParseError`] of input that does not parse. The
    /// environment is unchanged in that case.
    pub fn run(&mut self, line: &str) -> Result<Outcome, ParseError> {
        match line.trim() {
            "" => Ok(Outcome::Empty),
            "?" => Ok(Outcome::Help),
            "quit" => Ok(Outcome::Quit),
            "vars" => Ok(Outcome::Symbols(self.symbols())),
            source => self.execute(source),
        }
    }

    /// Lists every binding of the root environment ordered by name.
    #[must_use]
    pub fn symbols(&self) -> Vec<(String, String)> {
        self.environment
            .iter()
            .map(|(name, definition)| (name.to_string(), definition.describe(name)))
            .collect()
    }

    fn execute(&mut self, source: &str) -> Result<Outcome, ParseError> {
        let statement = if self.strict {
            parse_statement_strict(source, &self.environment)?
        } else {
            parse_statement(source, &self.environment)?
        };

        let outcome = match statement {
            Statement::Function(function) => {
                self.environment.define_custom_function(function.name.as_str(),
                                                        function.params.clone(),
                                                        function.body.clone());
                Outcome::FunctionDefined(function)
            },
            Statement::Expression(expr) => match &expr {
                Expr::Define { name, value } => {
                    let value = value.evaluate(&self.environment);
                    if value.is_nan() {
                        self.environment.undefine(name);
                        Outcome::Undefined { expr }
                    } else {
                        self.environment.define_constant(name.as_str(), value);
                        Outcome::Defined { expr, value }
                    }
                },
                _ => {
                    let value = expr.evaluate(&self.environment);
                    Outcome::Value { expr, value }
                },
            },
        };
        debug!("{outcome}");
        Ok(outcome)
    }
}
