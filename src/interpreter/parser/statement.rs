use std::collections::HashSet;

use crate::{
    ast::{Expr, FunctionDef, Statement},
    error::ParseError,
    interpreter::{
        environment::Environment,
        lexer::Token,
        parser::{
            core::{ParseResult, Parser, parse_complete},
            utils::{expect, parse_comma_separated, parse_identifier},
        },
        value::complex::NAN,
    },
};

/// Parses one line of input as a statement.
///
/// Input of the shape `name(p1, ..., pn) := body` is a function definition;
/// everything else is parsed by [`parse`](super::core::parse) as an
/// expression.
///
/// # Errors
/// Returns [`ParseError::InvalidFunctionDefinition`] for a definition head
/// whose parameters are not distinct symbols, and the errors of
/// [`parse`](super::core::parse) otherwise.
///
/// # Example
/// ```
/// use complexa::{
///     ast::Statement,
///     interpreter::{
///         environment::{Environment, Fallback},
///         parser::statement::parse_statement,
///     },
/// };
///
/// let environment = Environment::with_prelude(Fallback::Nan);
///
/// let Statement::Function(function) = parse_statement("f(x, y) := x * y + 1", &environment).unwrap()
/// else {
///     panic!("expected a function definition");
/// };
/// assert_eq!(function.to_string(), "f(x, y) = x * y + 1");
///
/// let statement = parse_statement("f(2)", &environment).unwrap();
/// assert!(matches!(statement, Statement::Expression(_)));
/// ```
pub fn parse_statement(source: &str, environment: &Environment<'_>) -> ParseResult<Statement> {
    parse_statement_with(source, environment, false)
}

/// Parses one line of input as a statement, rejecting unbound identifiers
/// like [`parse_strict`](super::core::parse_strict).
///
/// Parameters are bound while the body of a function definition is parsed,
/// so they never count as unknown.
///
/// # Errors
/// See [`parse_statement`] and [`parse_strict`](super::core::parse_strict).
pub fn parse_statement_strict(source: &str,
                              environment: &Environment<'_>)
                              -> ParseResult<Statement> {
    parse_statement_with(source, environment, true)
}

fn parse_statement_with(source: &str,
                        environment: &Environment<'_>,
                        strict: bool)
                        -> ParseResult<Statement> {
    let mut parser = Parser::new(source, environment, strict)?;
    if is_function_definition(&parser)? {
        return parse_function_definition(parser).map(Statement::Function);
    }
    parse_complete(&mut parser).map(Statement::Expression)
}

/// Looks ahead for `symbol ( ... ) :=` without consuming anything.
fn is_function_definition(parser: &Parser<'_, '_>) -> ParseResult<bool> {
    if !matches!(parser.current(), Token::Symbol(_)) {
        return Ok(false);
    }
    let mut tokens = parser.fork();
    tokens.next()?;
    if !matches!(tokens.current(), Token::RndOpen) {
        return Ok(false);
    }

    let mut depth = 1_usize;
    while depth > 0 {
        if !tokens.next()? {
            return Ok(false);
        }
        match tokens.current() {
            Token::RndOpen => depth += 1,
            Token::RndClose => depth -= 1,
            _ => {},
        }
    }
    tokens.next()?;
    Ok(matches!(tokens.current(), Token::Define))
}

/// Parses `name(p1, ..., pn) := body`.
///
/// The body is parsed in a child scope of the parser's environment in which
/// every parameter is bound to a constant, so a parameter that shares its
/// name with a function is a plain symbol inside the body. The function
/// itself is bound as well, so the body may call it.
fn parse_function_definition(mut parser: Parser<'_, '_>) -> ParseResult<FunctionDef> {
    let name = parse_identifier(&mut parser)?;
    expect(&mut parser, &Token::RndOpen)?;
    let params = parse_comma_separated(&mut parser, parse_parameter, Some(&Token::RndClose))?;
    expect(&mut parser, &Token::Define)?;

    let mut seen = HashSet::new();
    for (param, position) in &params {
        if !seen.insert(param.as_str()) {
            return Err(ParseError::InvalidFunctionDefinition { position: *position });
        }
    }
    let params = params.into_iter().map(|(param, _)| param).collect::<Vec<_>>();

    let mut scope = parser.environment().scope();
    scope.define_custom_function(name.as_str(), params.clone(), Expr::number(NAN));
    for param in &params {
        scope.define_constant(param.as_str(), NAN);
    }

    let strict = parser.is_strict();
    let mut body_parser = Parser::from_tokens(parser.into_tokens(), &scope, strict);
    let body = parse_complete(&mut body_parser)?;

    Ok(FunctionDef { name,
                     params,
                     body })
}

/// Parses one parameter name and remembers where it appeared.
fn parse_parameter(parser: &mut Parser<'_, '_>) -> ParseResult<(String, usize)> {
    let position = parser.position();
    match parser.current() {
        Token::Symbol(_) => Ok((parse_identifier(parser)?, position)),
        _ => Err(ParseError::InvalidFunctionDefinition { position }),
    }
}
