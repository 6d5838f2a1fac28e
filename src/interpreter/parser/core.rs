use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        environment::Environment,
        lexer::{Token, Tokenizer},
        parser::{binary::parse_relation, utils::expect_eof},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest expression tree the parser builds, and the deepest the grammar
/// may recurse while building it.
pub const MAX_NESTING: usize = 128;

/// Cursor over the tokens of one input plus the environment consulted to
/// classify identifiers.
///
/// The current token is the one-token lookahead; it has not been consumed
/// yet. Parsing reads the environment but never modifies it.
pub struct Parser<'src, 'env> {
    tokens:      Tokenizer<'src>,
    environment: &'env Environment<'env>,
    strict:      bool,
    /// Recursive grammar rules currently entered.
    nesting:     usize,
}

impl<'src, 'env> Parser<'src, 'env> {
    /// Creates a parser positioned on the first token of `source`.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedCharacter`] when the first token
    /// cannot be lexed.
    pub fn new(source: &'src str,
               environment: &'env Environment<'env>,
               strict: bool)
               -> ParseResult<Self> {
        let mut tokens = Tokenizer::new(source);
        tokens.next()?;
        Ok(Self::from_tokens(tokens, environment, strict))
    }

    /// Creates a parser that continues from an already advanced tokenizer.
    pub(in crate::interpreter::parser) const fn from_tokens(tokens: Tokenizer<'src>,
                                                            environment: &'env Environment<'env>,
                                                            strict: bool)
                                                            -> Self {
        Self { tokens,
               environment,
               strict,
               nesting: 0 }
    }

    /// Returns the lookahead token.
    #[must_use]
    pub const fn current(&self) -> &Token {
        self.tokens.current()
    }

    /// Returns the codepoint position of the lookahead token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.tokens.position()
    }

    /// Consumes the lookahead token.
    ///
    /// # Errors
    /// Propagates lexical errors from the tokenizer.
    pub fn advance(&mut self) -> ParseResult<()> {
        self.tokens.next()?;
        Ok(())
    }

    /// Returns the environment used to classify identifiers.
    #[must_use]
    pub const fn environment(&self) -> &'env Environment<'env> {
        self.environment
    }

    /// Returns `true` when unresolved identifiers are rejected.
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        self.strict
    }

    /// Runs `rule` one nesting level deeper.
    ///
    /// # Errors
    /// Returns [`ParseError::NestingTooDeep`] instead of running `rule` once
    /// [`MAX_NESTING`] levels are entered.
    pub(in crate::interpreter::parser) fn nested<T>(&mut self,
                                                    rule: impl FnOnce(&mut Self) -> ParseResult<T>)
                                                    -> ParseResult<T> {
        if self.nesting >= MAX_NESTING {
            return Err(ParseError::NestingTooDeep { position: self.position() });
        }
        self.nesting += 1;
        let result = rule(self);
        self.nesting -= 1;
        result
    }

    /// Passes `expr` through unless its tree is deeper than [`MAX_NESTING`].
    ///
    /// Every node the grammar builds goes through here, so left-associative
    /// chains such as `1 + 1 + ... + 1` are bounded as well.
    pub(in crate::interpreter::parser) fn bounded(&self, expr: Expr) -> ParseResult<Expr> {
        if expr.depth() > MAX_NESTING {
            return Err(ParseError::NestingTooDeep { position: self.position() });
        }
        Ok(expr)
    }

    /// Returns a copy of the token cursor for lookahead past the current
    /// token. Advancing the copy leaves the parser untouched.
    pub(in crate::interpreter::parser) fn fork(&self) -> Tokenizer<'src> {
        self.tokens.clone()
    }

    /// Releases the token cursor.
    pub(in crate::interpreter::parser) fn into_tokens(self) -> Tokenizer<'src> {
        self.tokens
    }
}

/// Parses a full expression.
///
/// This is the entry point of the grammar. It begins at the loosest level,
/// the relational chain, and recursively descends through the precedence
/// hierarchy.
///
/// Grammar: `expression := relation`
pub fn parse_expression(parser: &mut Parser<'_, '_>) -> ParseResult<Expr> {
    parse_relation(parser)
}

/// Parses one complete expression and requires the input to end after it.
pub(in crate::interpreter::parser) fn parse_complete(parser: &mut Parser<'_, '_>)
                                                     -> ParseResult<Expr> {
    let expr = parse_expression(parser)?;
    expect_eof(parser)?;
    Ok(expr)
}

/// Parses `source` into an expression tree.
///
/// Identifiers bound to functions in `environment` start calls; every other
/// identifier becomes a symbol reference, bound or not.
///
/// # Errors
/// Returns a [`ParseError`] for input that does not form exactly one
/// expression.
///
/// # Example
/// ```
/// use complexa::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{
///         environment::{Environment, Fallback},
///         parser::core::parse,
///     },
/// };
///
/// let environment = Environment::with_prelude(Fallback::Nan);
/// let expr = parse("1+2*3", &environment).unwrap();
///
/// let expected = Expr::binary(Expr::number(1.0),
///                             BinaryOperator::Add,
///                             Expr::binary(Expr::number(2.0), BinaryOperator::Mul, Expr::number(3.0)));
/// assert_eq!(expr, expected);
/// assert_eq!(expr.to_string(), "1 + 2 * 3");
/// ```
pub fn parse(source: &str, environment: &Environment<'_>) -> ParseResult<Expr> {
    let mut parser = Parser::new(source, environment, false)?;
    parse_complete(&mut parser)
}

/// Parses `source` like [`parse`], but rejects identifiers that are not
/// bound in `environment`.
///
/// The target of a `:=` definition is exempt, so `a := 3` parses even when
/// `a` is unbound.
///
/// # Errors
/// Returns [`ParseError::UnknownSymbol`] for an unbound identifier, and the
/// errors of [`parse`] otherwise.
///
/// # Example
/// ```
/// use complexa::{
///     error::ParseError,
///     interpreter::{
///         environment::{Environment, Fallback},
///         parser::core::parse_strict,
///     },
/// };
///
/// let environment = Environment::with_prelude(Fallback::Nan);
/// assert!(parse_strict("2 * pi", &environment).is_ok());
/// assert!(parse_strict("a := 2", &environment).is_ok());
/// assert_eq!(parse_strict("2 * b", &environment),
///            Err(ParseError::UnknownSymbol { name:     "b".to_string(),
///                                            position: 4, }));
/// ```
pub fn parse_strict(source: &str, environment: &Environment<'_>) -> ParseResult<Expr> {
    let mut parser = Parser::new(source, environment, true)?;
    parse_complete(&mut parser)
}
