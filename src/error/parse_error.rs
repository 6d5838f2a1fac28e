use thiserror::Error;

/// Represents all errors that can occur during tokenizing or parsing.
///
/// Every variant carries the zero-based codepoint position in the input at
/// which the problem was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character that starts no token.
    #[error("Error at {position}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Position of the character.
        position:  usize,
    },
    /// Found a token the grammar does not allow here, including trailing
    /// input after a complete expression.
    #[error("Error at {position}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Position of the token.
        position: usize,
    },
    /// Reached the end of input while more was expected.
    #[error("Error at {position}: Unexpected end of expression.")]
    UnexpectedEof {
        /// Position of the end of input.
        position: usize,
    },
    /// An identifier that is not bound, reported in strict mode only.
    #[error("Error at {position}: Unknown symbol '{name}'.")]
    UnknownSymbol {
        /// The unresolved identifier.
        name:     String,
        /// Position of the identifier.
        position: usize,
    },
    /// The left-hand side of `:=` is not a bare symbol.
    #[error("Error at {position}: Cannot define '{target}', the left-hand side of ':=' must be a symbol.")]
    InvalidDefinitionTarget {
        /// The rendered left-hand side.
        target:   String,
        /// Position of the `:=` operator.
        position: usize,
    },
    /// A decimal literal too large to be represented as a finite number.
    #[error("Error at {position}: Number literal is too large.")]
    NumberTooLarge {
        /// Position of the literal.
        position: usize,
    },
    /// The expression nests deeper than
    /// [`MAX_NESTING`](crate::interpreter::parser::core::MAX_NESTING) levels.
    #[error("Error at {position}: Expression is nested too deeply.")]
    NestingTooDeep {
        /// Position at which the limit was reached.
        position: usize,
    },
    /// A function definition head such as `f(x, x) := ...` is malformed.
    #[error("Error at {position}: Invalid function definition. Example: f(x, y) := x * y")]
    InvalidFunctionDefinition {
        /// Position of the offending parameter.
        position: usize,
    },
}

impl ParseError {
    /// Returns the position at which the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEof { position }
            | Self::UnknownSymbol { position, .. }
            | Self::InvalidDefinitionTarget { position, .. }
            | Self::NumberTooLarge { position }
            | Self::NestingTooDeep { position }
            | Self::InvalidFunctionDefinition { position } => *position,
        }
    }
}

/// Returned by [`Expr::define`](crate::ast::Expr::define) when the target of a
/// definition is not a bare symbol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("left-hand side of ':=' must be a symbol, found '{target}'")]
pub struct InvalidDefinitionTarget {
    /// The rendered expression that was rejected.
    pub target: String,
}
