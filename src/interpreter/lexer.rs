use std::fmt;

use log::trace;
use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Operators follow longest-match rules: `<=>` wins over `<=`, which wins over
/// `<`.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// End of input. Never produced by the lexer itself; the [`Tokenizer`]
    /// reports it once the input is exhausted.
    Eof,
    /// Decimal integer literal such as `42`. There is no fractional or
    /// exponent syntax.
    #[regex(r"[0-9]+", parse_number)]
    Number(f64),
    /// A single Greek letter such as `π`, or a run of Latin letters such as
    /// `sin`. Coptic letters and the spacing accents of the Greek blocks are
    /// not Greek letters.
    #[regex(r"[\p{Greek}&&\p{L}]", |lex| lex.slice().to_owned())]
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_owned())]
    Symbol(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Mul,
    /// `/`
    #[token("/")]
    Div,
    /// `^`
    #[token("^")]
    Pow,
    /// `!`
    #[token("!")]
    Fac,
    /// `(`
    #[token("(")]
    RndOpen,
    /// `)`
    #[token(")")]
    RndClose,
    /// `=`
    #[token("=")]
    Equ,
    /// `<>`
    #[token("<>")]
    NotEqu,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `<=`
    #[token("<=")]
    LessEqu,
    /// `>=`
    #[token(">=")]
    GreaterEqu,
    /// `<=>`
    #[token("<=>")]
    Equivalence,
    /// `:=`
    #[token(":=")]
    Define,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `->`, reserved for a future function syntax.
    #[token("->")]
    RightArrow,
    /// Whitespace.
    #[regex(r"\s+", logos::skip)]
    Ignored,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Eof => "end of input",
            Self::Number(n) => return write!(f, "{n}"),
            Self::Symbol(name) => return write!(f, "'{name}'"),
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Mul => "'*'",
            Self::Div => "'/'",
            Self::Pow => "'^'",
            Self::Fac => "'!'",
            Self::RndOpen => "'('",
            Self::RndClose => "')'",
            Self::Equ => "'='",
            Self::NotEqu => "'<>'",
            Self::Less => "'<'",
            Self::Greater => "'>'",
            Self::LessEqu => "'<='",
            Self::GreaterEqu => "'>='",
            Self::Equivalence => "'<=>'",
            Self::Define => "':='",
            Self::Comma => "','",
            Self::Colon => "':'",
            Self::RightArrow => "'->'",
            Self::Ignored => "whitespace",
        };
        f.write_str(text)
    }
}

/// Converts a run of decimal digits to the nearest `f64`.
///
/// Literals beyond the `f64` range come out infinite; [`Tokenizer::next`]
/// rejects them.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Cursor over the tokens of one input string.
///
/// The tokenizer produces one token at a time on demand. [`Tokenizer::next`]
/// advances and [`Tokenizer::current`] reads the current token without
/// advancing. Positions are counted in codepoints, not bytes.
///
/// # Example
/// ```
/// use complexa::interpreter::lexer::{Token, Tokenizer};
///
/// let mut tokens = Tokenizer::new("2 <=> π");
/// assert!(tokens.next().unwrap());
/// assert_eq!(tokens.current(), &Token::Number(2.0));
/// assert!(tokens.next().unwrap());
/// assert_eq!(tokens.current(), &Token::Equivalence);
/// assert!(tokens.next().unwrap());
/// assert_eq!(tokens.current(), &Token::Symbol("π".to_string()));
/// assert_eq!(tokens.position(), 6);
/// assert!(!tokens.next().unwrap());
/// assert_eq!(tokens.current(), &Token::Eof);
/// ```
#[derive(Clone)]
pub struct Tokenizer<'src> {
    lexer:      logos::Lexer<'src, Token>,
    current:    Token,
    /// Codepoint position of the current token.
    position:   usize,
    /// Byte and codepoint offsets of the last position computed, so that
    /// positions are counted incrementally.
    byte_mark:  usize,
    char_mark:  usize,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer positioned before the first token. The current
    /// token is [`Token::Eof`] until [`Tokenizer::next`] is called.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer:     Token::lexer(source),
               current:   Token::Eof,
               position:  0,
               byte_mark: 0,
               char_mark: 0, }
    }

    /// Advances to the next token.
    ///
    /// Returns `Ok(false)` and sets the current token to [`Token::Eof`] once
    /// the input is exhausted.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedCharacter`] for a character that
    /// starts no token, and [`ParseError::NumberTooLarge`] for a literal
    /// that overflows to infinity.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<bool, ParseError> {
        match self.lexer.next() {
            Some(Ok(Token::Number(value))) if value.is_infinite() => {
                let position = self.char_offset(self.lexer.span().start);
                Err(ParseError::NumberTooLarge { position })
            },
            Some(Ok(token)) => {
                self.position = self.char_offset(self.lexer.span().start);
                trace!("token {token} at {}", self.position);
                self.current = token;
                Ok(true)
            },
            Some(Err(())) => {
                let position = self.char_offset(self.lexer.span().start);
                let character = self.lexer.slice().chars().next().unwrap_or('\u{FFFD}');
                Err(ParseError::UnexpectedCharacter { character, position })
            },
            None => {
                self.position = self.char_offset(self.lexer.source().len());
                self.current = Token::Eof;
                Ok(false)
            },
        }
    }

    /// Returns the current token without advancing.
    #[must_use]
    pub const fn current(&self) -> &Token {
        &self.current
    }

    /// Returns the codepoint position of the current token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    fn char_offset(&mut self, byte: usize) -> usize {
        let source = self.lexer.source();
        if byte < self.byte_mark {
            self.byte_mark = 0;
            self.char_mark = 0;
        }
        self.char_mark += source[self.byte_mark..byte].chars().count();
        self.byte_mark = byte;
        self.char_mark
    }
}
