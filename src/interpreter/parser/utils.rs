use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

/// Builds the error for a lookahead token the grammar does not allow.
///
/// The end of input is reported as [`ParseError::UnexpectedEof`], any other
/// token as [`ParseError::UnexpectedToken`].
pub(in crate::interpreter::parser) fn unexpected(parser: &Parser<'_, '_>) -> ParseError {
    let position = parser.position();
    match parser.current() {
        Token::Eof => ParseError::UnexpectedEof { position },
        token => ParseError::UnexpectedToken { token: token.to_string(),
                                               position },
    }
}

/// Consumes the lookahead token if it equals `expected`, and fails
/// otherwise.
pub(in crate::interpreter::parser) fn expect(parser: &mut Parser<'_, '_>,
                                             expected: &Token)
                                             -> ParseResult<()> {
    if parser.current() == expected {
        parser.advance()
    } else {
        Err(unexpected(parser))
    }
}

/// Fails unless the whole input has been consumed.
///
/// Trailing input after a complete expression, such as the `3` in `1 + 2 3`,
/// is reported as [`ParseError::UnexpectedToken`].
pub(in crate::interpreter::parser) fn expect_eof(parser: &Parser<'_, '_>) -> ParseResult<()> {
    if matches!(parser.current(), Token::Eof) {
        Ok(())
    } else {
        Err(unexpected(parser))
    }
}

/// Parses a non-empty comma-separated list.
///
/// With a `closing` token the list must end with it, and the closing token
/// is consumed. Without one the list ends at the first item that is not
/// followed by a comma.
///
/// Grammar (simplified): `list := item ("," item)* closing?`
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the input ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'src, 'env, T>(
    parser: &mut Parser<'src, 'env>,
    parse_item: impl Fn(&mut Parser<'src, 'env>) -> ParseResult<T>,
    closing: Option<&Token>)
    -> ParseResult<Vec<T>> {
    let mut items = vec![parse_item(parser)?];
    while matches!(parser.current(), Token::Comma) {
        parser.advance()?;
        items.push(parse_item(parser)?);
    }
    if let Some(closing) = closing {
        expect(parser, closing)?;
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// The lookahead token must be a [`Token::Symbol`]. Whether the name is
/// bound is not checked.
pub(in crate::interpreter::parser) fn parse_identifier(parser: &mut Parser<'_, '_>)
                                                       -> ParseResult<String> {
    match parser.current() {
        Token::Symbol(name) => {
            let name = name.clone();
            parser.advance()?;
            Ok(name)
        },
        _ => Err(unexpected(parser)),
    }
}
