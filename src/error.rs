/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing an
/// expression. Evaluation has no error type: undefined results are reported
/// as NaN numbers instead.
pub mod parse_error;

pub use parse_error::{InvalidDefinitionTarget, ParseError};
