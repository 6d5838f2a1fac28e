/// Core evaluation dispatch.
///
/// Implements `Expr::evaluate`, which walks the tree and resolves symbols
/// against the environment chain.
pub mod core;

/// Unary operator evaluation.
///
/// Handles postfix factorial; negation is plain complex negation.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements arithmetic, exponentiation and the relational operators, whose
/// results are numbers or the NaN sentinel rather than booleans.
pub mod binary;

/// Function evaluation.
///
/// Handles calls of native and user-defined functions, including the child
/// scope created for each user-defined call.
pub mod function;
