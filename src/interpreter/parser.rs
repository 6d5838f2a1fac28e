/// Parser state and the expression entry points.
///
/// Contains the [`Parser`](core::Parser) cursor over the token stream and
/// the `parse` family of functions.
pub mod core;

/// Binary operator parsing.
///
/// Implements the left-associative relational, additive and multiplicative
/// levels and the right-associative `^`.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles postfix factorial, prefix negation, literals, grouping, symbol
/// references and function calls.
pub mod unary;

/// Utility functions for the parser.
///
/// Provides token expectations and comma-separated list parsing shared by
/// calls and function definitions.
pub mod utils;

/// Statement parsing.
///
/// Recognizes function definitions such as `f(x, y) := x * y` and falls back
/// to plain expressions for every other input.
pub mod statement;
