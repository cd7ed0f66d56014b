use crate::{
    error::ParseError,
    lexer::{config::LexerConfig, core::Lexer, token::TokenKind},
    parser::instance::ParserInstance,
};

/// Result type used by the parser and every grammar rule.
pub type ParseResult<T> = Result<T, ParseError>;

/// The root of a grammar.
///
/// The parser machinery knows nothing about the language it parses; the
/// grammar drives it. `parse` is called once per input with a fresh
/// [`ParserInstance`] positioned on the first token.
pub trait Grammar<K: TokenKind> {
    /// The tree produced for one input.
    type Output;

    /// Parses one complete input.
    ///
    /// # Errors
    /// Any [`ParseError`]; the first one aborts the input and no partial
    /// output is returned.
    fn parse(&self, parser: &mut ParserInstance<'_, K>) -> ParseResult<Self::Output>;
}

/// A grammar bound to the lexical rules of its language.
///
/// # Example
/// ```
/// use lexis::{
///     lexer::{LexerConfig, Literal, TokenKind, TokenMapping, Lexeme, Token},
///     parser::{Grammar, ParseResult, Parser, ParserInstance},
/// };
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Kind {
///     End,
///     Number,
///     Plus,
/// }
///
/// impl TokenKind for Kind {
///     const END: Self = Self::End;
/// }
///
/// struct Sum;
///
/// impl Grammar<Kind> for Sum {
///     type Output = i64;
///
///     fn parse(&self, parser: &mut ParserInstance<'_, Kind>) -> ParseResult<i64> {
///         let mut total = 0;
///         loop {
///             if let Some(Literal::Int(n)) = parser.consume(Kind::Number)?.value {
///                 total += n;
///             }
///             if !parser.at(Kind::Plus) {
///                 break;
///             }
///             parser.advance()?;
///         }
///         parser.consume(Kind::End)?;
///         Ok(total)
///     }
/// }
///
/// let config = LexerConfig::new(vec![
///     TokenMapping::predicate(|s| s.current().is_ascii_digit(), |s| {
///         let line = s.line();
///         Ok(Lexeme::Token(Token::with_value(Kind::Number, s.read_number()?, line)))
///     }),
///     TokenMapping::literal("+", Kind::Plus),
/// ]);
///
/// let parser = Parser::new(Sum, config);
/// assert_eq!(parser.parse("1 + 2 + 3").unwrap(), 6);
/// assert!(parser.parse("1 + + 3").is_err());
/// ```
#[derive(Debug)]
pub struct Parser<G, K> {
    grammar: G,
    config:  LexerConfig<K>,
}

impl<G, K> Parser<G, K>
    where K: TokenKind,
          G: Grammar<K>
{
    /// Creates a parser from a grammar and the lexer configuration of its
    /// language.
    pub const fn new(grammar: G, config: LexerConfig<K>) -> Self {
        Self { grammar, config }
    }

    /// Parses one input.
    ///
    /// # Errors
    /// Returns the first lexing or parsing error.
    pub fn parse(&self, input: &str) -> ParseResult<G::Output> {
        let lexer = Lexer::new(input, &self.config);
        let mut instance = ParserInstance::new(lexer)?;
        self.grammar.parse(&mut instance)
    }
}
