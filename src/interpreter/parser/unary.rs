use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_power,
            core::{ParseResult, Parser, parse_expression},
            utils::{expect, parse_comma_separated, unexpected},
        },
    },
};

/// Parses a power expression followed by any number of postfix `!`.
///
/// `3!!` is `(3!)!`.
///
/// The rule is: `factorial := power ("!")*`
pub fn parse_factorial(parser: &mut Parser<'_, '_>) -> ParseResult<Expr> {
    let mut node = parse_power(parser)?;
    while matches!(parser.current(), Token::Fac) {
        parser.advance()?;
        node = parser.bounded(Expr::factorial(node))?;
    }
    Ok(node)
}

/// Parses a primary expression.
///
/// Primary expressions include:
/// - parenthesized expressions
/// - prefix negation, which applies to the following primary only, so
///   `-2^2` is `(-2)^2`
/// - number literals
/// - function calls and symbol references
///
/// # Errors
/// Returns [`ParseError::UnexpectedEof`] or [`ParseError::UnexpectedToken`]
/// when no primary expression starts at the current token, and
/// [`ParseError::NestingTooDeep`] for groupings, negations and calls nested
/// too deeply.
pub fn parse_primary(parser: &mut Parser<'_, '_>) -> ParseResult<Expr> {
    match parser.current().clone() {
        Token::RndOpen => parser.nested(parse_grouping),
        Token::Minus => {
            parser.advance()?;
            let operand = parser.nested(parse_primary)?;
            parser.bounded(Expr::negate(operand))
        },
        Token::Number(value) => {
            parser.advance()?;
            Ok(Expr::number(value))
        },
        Token::Symbol(name) => parse_identifier_or_function(parser, name),
        _ => Err(unexpected(parser)),
    }
}

/// Parses `( expression )`.
fn parse_grouping(parser: &mut Parser<'_, '_>) -> ParseResult<Expr> {
    parser.advance()?;
    let expr = parse_expression(parser)?;
    expect(parser, &Token::RndClose)?;
    Ok(expr)
}

/// Parses an identifier that the environment classifies as either a
/// function or a symbol.
///
/// A function name may carry a power suffix that applies to the result of
/// the call, as in `sin^2(x)`. Arguments are either parenthesized or,
/// without an opening parenthesis, a greedy comma-separated list of full
/// expressions: `sin x + 1` is `sin(x + 1)`.
///
/// A function name directly followed by `:=` is the target of a definition
/// and parses as a symbol.
///
/// # Errors
/// In strict mode, returns [`ParseError::UnknownSymbol`] for an identifier
/// that is bound to nothing and is not the target of a definition.
fn parse_identifier_or_function(parser: &mut Parser<'_, '_>, name: String) -> ParseResult<Expr> {
    let position = parser.position();
    parser.advance()?;

    let is_definition_target = matches!(parser.current(), Token::Define);
    if parser.environment().is_function(&name) && !is_definition_target {
        return parser.nested(|parser| parse_call(parser, name));
    }

    if parser.is_strict() && !is_definition_target && parser.environment().lookup(&name).is_none() {
        return Err(ParseError::UnknownSymbol { name, position });
    }

    Ok(Expr::symbol(name))
}

/// Parses the remainder of a call after the function name.
///
/// The rule is:
/// `call := ("^" primary)? ( "(" expression ("," expression)* ")" | expression ("," expression)* )`
fn parse_call(parser: &mut Parser<'_, '_>, name: String) -> ParseResult<Expr> {
    let exponent = if matches!(parser.current(), Token::Pow) {
        parser.advance()?;
        Some(parse_primary(parser)?)
    } else {
        None
    };

    let arguments = if matches!(parser.current(), Token::RndOpen) {
        parser.advance()?;
        parse_comma_separated(parser, parse_expression, Some(&Token::RndClose))?
    } else {
        parse_comma_separated(parser, parse_expression, None)?
    };

    let call = parser.bounded(Expr::call(name, arguments))?;
    match exponent {
        Some(exponent) => parser.bounded(Expr::binary(call, BinaryOperator::Pow, exponent)),
        None => Ok(call),
    }
}
