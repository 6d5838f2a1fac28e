use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{MAX_NESTING, ParseResult, Parser},
            unary::{parse_factorial, parse_primary},
        },
    },
};

/// Maps an operator token to the binary operator it denotes.
///
/// `:=` is not a binary operator; it builds an [`Expr::Define`] instead.
const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Mul => Some(BinaryOperator::Mul),
        Token::Div => Some(BinaryOperator::Div),
        Token::Pow => Some(BinaryOperator::Pow),
        Token::Equ => Some(BinaryOperator::Equal),
        Token::Less => Some(BinaryOperator::Less),
        _ => None,
    }
}

/// Parses a chain of relations and definitions.
///
/// The chain is left-associative. `:=` requires a bare symbol on its left,
/// so `a := 3` is accepted while `2 * a := 3` and `a := b := 3` are
/// rejected. Like every rule below it, the tree it builds is limited to
/// [`MAX_NESTING`] levels.
///
/// The rule is: `relation := additive ((":=" | "=" | "<") additive)*`
///
/// # Errors
/// Returns [`ParseError::InvalidDefinitionTarget`] at the position of `:=`
/// when its left operand is not a symbol, and
/// [`ParseError::NestingTooDeep`] when the chain grows too deep.
pub fn parse_relation(parser: &mut Parser<'_, '_>) -> ParseResult<Expr> {
    let mut left = parse_additive(parser)?;
    loop {
        let position = parser.position();
        if matches!(parser.current(), Token::Define) {
            parser.advance()?;
            let right = parse_additive(parser)?;
            let definition = Expr::define(left, right).map_err(|err| {
                                 ParseError::InvalidDefinitionTarget { target: err.target,
                                                                       position }
                             })?;
            left = parser.bounded(definition)?;
            continue;
        }
        if let Some(op) = token_to_binary_operator(parser.current())
           && matches!(op, BinaryOperator::Equal | BinaryOperator::Less)
        {
            parser.advance()?;
            let right = parse_additive(parser)?;
            left = parser.bounded(Expr::binary(left, op, right))?;
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive(parser: &mut Parser<'_, '_>) -> ParseResult<Expr> {
    let mut left = parse_multiplicative(parser)?;
    while let Some(op) = token_to_binary_operator(parser.current())
          && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    {
        parser.advance()?;
        let right = parse_multiplicative(parser)?;
        left = parser.bounded(Expr::binary(left, op, right))?;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*` and `/`.
///
/// The rule is: `multiplicative := factorial (("*" | "/") factorial)*`
pub fn parse_multiplicative(parser: &mut Parser<'_, '_>) -> ParseResult<Expr> {
    let mut left = parse_factorial(parser)?;
    while let Some(op) = token_to_binary_operator(parser.current())
          && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    {
        parser.advance()?;
        let right = parse_factorial(parser)?;
        left = parser.bounded(Expr::binary(left, op, right))?;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// `^` is right-associative: `a ^ b ^ c` parses as `a ^ (b ^ c)`.
///
/// The rule is: `power := primary ("^" power)?`
pub fn parse_power(parser: &mut Parser<'_, '_>) -> ParseResult<Expr> {
    let base = parse_primary(parser)?;
    if matches!(parser.current(), Token::Pow) {
        parser.advance()?;
        let exponent = parser.nested(parse_power)?;
        return parser.bounded(Expr::binary(base, BinaryOperator::Pow, exponent));
    }
    Ok(base)
}
