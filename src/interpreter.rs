/// The environment module holds the symbol table.
///
/// An environment maps names to constants and functions and chains to an
/// enclosing environment, so that every function call gets its own scope
/// that can still see the bindings of its caller.
///
/// # Responsibilities
/// - Stores constants, native functions and user-defined functions by name.
/// - Resolves names innermost scope first.
/// - Seeds root environments with the standard prelude.
pub mod environment;
/// The evaluator module computes the value of an expression tree.
///
/// Evaluation is a recursive walk over the tree that threads the environment
/// through every node. It never fails: operations without a defined result
/// produce NaN.
///
/// # Responsibilities
/// - Evaluates every expression node against an environment.
/// - Applies native and user-defined functions, each user-defined call in a
///   fresh child scope.
/// - Bounds both the recursion depth and the total number of user-defined
///   calls.
pub mod evaluator;
/// The lexer module tokenizes input text for further parsing.
///
/// The lexer reads the input as Unicode text and produces numbers,
/// identifiers (runs of Latin letters or single Greek letters) and operators,
/// with longest-match rules for multi-character operators.
///
/// # Responsibilities
/// - Converts the input into tokens with codepoint positions.
/// - Reports characters that start no token and literals too large to
///   represent.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser with one token of lookahead. It
/// consults the environment only to decide whether an identifier starts a
/// function call.
///
/// # Responsibilities
/// - Converts tokens into expression trees according to the operator
///   precedence grammar.
/// - Recognizes function definitions at statement level.
/// - Reports syntax errors with their position.
/// - Limits how deeply expressions nest.
pub mod parser;
/// The value module defines the runtime number type.
///
/// Every expression evaluates to a complex number with double precision
/// real and imaginary parts.
pub mod value;
