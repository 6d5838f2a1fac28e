//! # complexa
//!
//! complexa is a small expression language over complex numbers, written in
//! Rust. It tokenizes a formula, parses it into a syntax tree according to a
//! fixed operator precedence grammar and evaluates the tree against an
//! environment of constants and functions.
//!
//! ```
//! use complexa::{Environment, Fallback, parse};
//!
//! let environment = Environment::with_prelude(Fallback::Nan);
//! let expr = parse("e^(i*π) + 1", &environment).unwrap();
//!
//! let value = expr.evaluate(&environment);
//! assert!(value.abs() < 1e-15);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::float_cmp)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent an
/// expression as a tree. The tree is built by the parser, rendered back to
/// text by `Display` and evaluated by the evaluator.
///
/// # Responsibilities
/// - Defines one expression variant per node kind.
/// - Knows the precedence of every node and parenthesizes on rendering.
/// - Validates definition targets at construction.
pub mod ast;
/// Provides the error types of tokenizing and parsing.
///
/// Evaluation has no error type: it reports undefined results as NaN.
pub mod error;
/// Orchestrates tokenizing, parsing and evaluation.
///
/// This module ties together the lexer, the parser, the evaluator, the
/// environment and the number type.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Provides entry points for parsing and evaluating input.
pub mod interpreter;
/// Line-oriented driver that owns a root environment.
///
/// A session applies definitions, answers the `vars`, `?` and `quit`
/// commands and formats every result the way the command line prints it.
pub mod session;
/// General utilities for safe numeric conversion.
pub mod util;

pub use crate::{
    ast::{BinaryOperator, Expr, Precedence, Statement},
    error::ParseError,
    interpreter::{
        environment::{Definition, Environment, Fallback},
        parser::{
            core::{parse, parse_strict},
            statement::{parse_statement, parse_statement_strict},
        },
        value::complex::Number,
    },
    session::{Outcome, Session, SessionOptions},
};

/// Parses and evaluates `source` against a fresh environment holding the
/// standard prelude.
///
/// Symbols that are not defined evaluate to NaN.
///
/// # Errors
/// Returns an error if `source` does not parse.
///
/// # Examples
/// ```
/// use complexa::{Number, get_result};
///
/// let value = get_result("2^3^2").unwrap();
/// assert_eq!(value, Number::from(512.0));
///
/// // Input with an unbalanced parenthesis.
/// let res = get_result("(1 + 2");
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str) -> Result<Number, ParseError> {
    let environment = Environment::with_prelude(Fallback::Nan);
    let expr = parse(source, &environment)?;
    Ok(expr.evaluate(&environment))
}
