use std::{cell::Cell, collections::BTreeMap};

use log::debug;

use crate::{
    ast::Expr,
    interpreter::value::complex::{NAN, Number, ZERO},
};

/// Environment entries: constants, native functions and user functions.
pub mod definition;
/// The standard constants and functions seeded into a root environment.
pub mod prelude;

pub use definition::{BinaryFn, Definition, UnaryFn};

/// Nested calls deeper than this evaluate to NaN instead of recursing.
pub const MAX_CALL_DEPTH: usize = 64;

/// User-defined calls one top-level call may make in total, itself
/// included. Calls past the budget evaluate to NaN.
pub const MAX_CALLS: usize = 100_000;

/// What an unresolved symbol evaluates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fallback {
    /// Unresolved symbols are NaN, the canonical undefined result.
    #[default]
    Nan,
    /// Unresolved symbols are zero.
    Zero,
}

impl Fallback {
    /// Returns the number an unresolved symbol evaluates to.
    #[must_use]
    pub const fn value(self) -> Number {
        match self {
            Self::Nan => NAN,
            Self::Zero => ZERO,
        }
    }
}

/// A chained mapping from names to [`Definition`]s.
///
/// Lookup walks from the innermost scope outward and returns the first
/// match. A root environment has no outer scope; function calls create a
/// child scope per call that borrows its caller's environment and is dropped
/// when the call returns.
///
/// # Example
/// ```
/// use complexa::interpreter::{environment::Environment, value::complex::Number};
///
/// let mut root = Environment::new();
/// root.define_constant("a", Number::from(10.0));
///
/// let mut scope = root.scope();
/// scope.define_constant("x", Number::from(5.0));
///
/// assert_eq!(scope.number("a"), Some(Number::from(10.0)));
/// assert_eq!(scope.number("x"), Some(Number::from(5.0)));
/// assert_eq!(root.number("x"), None);
/// ```
#[derive(Debug, Default)]
pub struct Environment<'outer> {
    bindings: BTreeMap<String, Definition>,
    outer:    Option<&'outer Environment<'outer>>,
    fallback: Fallback,
    depth:    usize,
    /// User-defined calls charged since the last reset. Only the root's
    /// counter is used.
    calls:    Cell<usize>,
}

impl<'outer> Environment<'outer> {
    /// Creates an empty root environment whose unresolved symbols are NaN.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty root environment with the given unresolved-symbol
    /// policy.
    #[must_use]
    pub fn with_fallback(fallback: Fallback) -> Self {
        Self { fallback,
               ..Self::default() }
    }

    /// Creates a root environment seeded with the standard constants and
    /// functions (see [`prelude`]).
    #[must_use]
    pub fn with_prelude(fallback: Fallback) -> Self {
        let mut environment = Self::with_fallback(fallback);
        prelude::install(&mut environment);
        environment
    }

    /// Creates an empty child scope chained to this environment.
    ///
    /// The child inherits the fallback policy.
    #[must_use]
    pub fn scope(&self) -> Environment<'_> {
        Environment { bindings: BTreeMap::new(),
                      outer:    Some(self),
                      fallback: self.fallback,
                      depth:    self.depth + 1,
                      calls:    Cell::new(0), }
    }

    /// Returns the unresolved-symbol policy.
    #[must_use]
    pub const fn fallback(&self) -> Fallback {
        self.fallback
    }

    /// Returns how many scopes lie between this one and the root.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Charges one user-defined call against the budget of the root
    /// environment.
    ///
    /// Returns `false`, charging nothing, once [`MAX_CALLS`] calls have been
    /// charged since the last [`reset_calls`](Self::reset_calls).
    #[must_use]
    pub fn charge_call(&self) -> bool {
        let calls = &self.root().calls;
        if calls.get() >= MAX_CALLS {
            return false;
        }
        calls.set(calls.get() + 1);
        true
    }

    /// Restores the full call budget of the root environment.
    pub fn reset_calls(&self) {
        self.root().calls.set(0);
    }

    fn root(&self) -> &Self {
        let mut environment = self;
        while let Some(outer) = environment.outer {
            environment = outer;
        }
        environment
    }

    /// Binds `name` to a constant in this scope, replacing any previous
    /// binding of the same name in this scope.
    pub fn define_constant(&mut self, name: impl Into<String>, value: Number) {
        self.insert(name.into(), Definition::Constant(value));
    }

    /// Binds `name` to a native function of one argument.
    pub fn define_native_function(&mut self, name: impl Into<String>, function: UnaryFn) {
        self.insert(name.into(), Definition::Native(function));
    }

    /// Binds `name` to a native function of two arguments.
    pub fn define_native_function2(&mut self, name: impl Into<String>, function: BinaryFn) {
        self.insert(name.into(), Definition::Native2(function));
    }

    /// Binds `name` to a user-defined function.
    pub fn define_custom_function(&mut self,
                                  name: impl Into<String>,
                                  params: Vec<String>,
                                  body: Expr) {
        self.insert(name.into(), Definition::Custom { params, body });
    }

    /// Removes the binding of `name` from this scope and returns it.
    ///
    /// Outer scopes are never touched.
    pub fn undefine(&mut self, name: &str) -> Option<Definition> {
        let removed = self.bindings.remove(name);
        if removed.is_some() && self.depth == 0 {
            debug!("undefine {name}");
        }
        removed
    }

    /// Looks `name` up in this scope and then in each enclosing scope.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Definition> {
        self.bindings
            .get(name)
            .or_else(|| self.outer.and_then(|outer| outer.lookup(name)))
    }

    /// Returns the value of the constant bound to `name`, if any.
    ///
    /// A function bound to `name` hides constants of outer scopes.
    #[must_use]
    pub fn number(&self, name: &str) -> Option<Number> {
        match self.lookup(name)? {
            Definition::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns `true` when `name` resolves to a function of any kind.
    #[must_use]
    pub fn is_function(&self, name: &str) -> bool {
        self.lookup(name).is_some_and(Definition::is_function)
    }

    /// Iterates over the bindings of this scope, ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Definition)> {
        self.bindings
            .iter()
            .map(|(name, definition)| (name.as_str(), definition))
    }

    /// Returns the number of bindings in this scope.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` when this scope has no bindings of its own.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    fn insert(&mut self, name: String, definition: Definition) {
        if self.depth == 0 {
            debug!("define {}", definition.describe(&name));
        }
        self.bindings.insert(name, definition);
    }
}
