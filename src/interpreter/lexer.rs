use crate::{
    error::LexError,
    lexer::{
        config::LexerConfig,
        mapping::{Lexeme, TokenMapping},
        state::LexerState,
        token::{Literal, Token, TokenKind},
    },
};

/// The token kinds of the console language.
///
/// Literal kinds carry their value in the token: numbers and strings as
/// [`Literal`], identifiers as [`Literal::Str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// End of input.
    End,
    /// `null`
    Null,
    /// Integer literal tokens, such as `42` or `1_000`.
    Integer,
    /// Float literal tokens, such as `2.5`, `.5` or `3f`.
    Float,
    /// String literal tokens, such as `"hi"`.
    String,
    /// Identifier tokens; variable, type or function names such as `x`,
    /// `int` or `add`.
    Identifier,
    /// `true`
    True,
    /// `false`
    False,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `if`
    If,
    /// `else`
    Else,
    /// `loop`
    Loop,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `=`
    Assign,
    /// `typeof`
    TypeOf,
    /// `func`
    Func,
    /// `return`
    Return,
    /// `var`
    Var,
    /// `print`
    Print,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

impl TokenKind for Kind {
    const END: Self = Self::End;
}

fn starts_number(state: &LexerState) -> bool {
    let c = state.current();
    c.is_ascii_digit() || (c == '.' && state.peek().is_ascii_digit())
}

fn starts_identifier(state: &LexerState) -> bool {
    let c = state.current();
    c.is_alphabetic() || (c == '_' && state.peek().is_alphabetic())
}

fn number(state: &mut LexerState) -> Result<Lexeme<Kind>, LexError> {
    let line = state.line();
    let literal = state.read_number()?;
    let kind = match literal {
        Literal::Float(_) => Kind::Float,
        _ => Kind::Integer,
    };
    Ok(Lexeme::Token(Token::with_value(kind, literal, line)))
}

fn identifier(state: &mut LexerState) -> Result<Lexeme<Kind>, LexError> {
    let line = state.line();
    let name = state.read_identifier();
    Ok(Lexeme::Token(Token::with_value(Kind::Identifier, Literal::Str(name), line)))
}

fn string(state: &mut LexerState) -> Result<Lexeme<Kind>, LexError> {
    let line = state.line();
    let text = state.read_string()?;
    Ok(Lexeme::Token(Token::with_value(Kind::String, Literal::Str(text), line)))
}

/// The lexical rules of the console language.
///
/// Keywords are keyed mappings with a word boundary, so `loops` is an
/// identifier. Predicate mappings come last and are tried in this order:
/// numbers, identifiers, strings.
#[must_use]
pub fn token_mappings() -> Vec<TokenMapping<Kind>> {
    vec![TokenMapping::literal("(", Kind::LParen),
         TokenMapping::literal(")", Kind::RParen),
         TokenMapping::literal("{", Kind::LBrace),
         TokenMapping::literal("}", Kind::RBrace),
         TokenMapping::literal(",", Kind::Comma),
         TokenMapping::literal(";", Kind::Semicolon),
         TokenMapping::literal("=", Kind::Assign),
         TokenMapping::literal("+", Kind::Plus),
         TokenMapping::literal("-", Kind::Minus),
         TokenMapping::literal("*", Kind::Multiply),
         TokenMapping::literal("/", Kind::Divide),
         TokenMapping::keyword("typeof", Kind::TypeOf),
         TokenMapping::keyword("return", Kind::Return),
         TokenMapping::keyword("print", Kind::Print),
         TokenMapping::keyword("false", Kind::False),
         TokenMapping::keyword("func", Kind::Func),
         TokenMapping::keyword("else", Kind::Else),
         TokenMapping::keyword("loop", Kind::Loop),
         TokenMapping::keyword("true", Kind::True),
         TokenMapping::keyword("null", Kind::Null),
         TokenMapping::keyword("var", Kind::Var),
         TokenMapping::keyword("if", Kind::If),
         TokenMapping::predicate(starts_number, number),
         TokenMapping::predicate(starts_identifier, identifier),
         TokenMapping::predicate(|s| s.current() == '"', string)]
}

/// The console language's lexer configuration, with `//` and `/* */`
/// comments.
///
/// # Example
/// ```
/// use lexis::{
///     interpreter::lexer::{Kind, lexer_config},
///     lexer::Lexer,
/// };
///
/// let config = lexer_config();
/// let kinds: Vec<Kind> = Lexer::new("1+2*3", &config).tokenize()
///                                                  .unwrap()
///                                                  .into_iter()
///                                                  .map(|t| t.kind)
///                                                  .collect();
/// assert_eq!(kinds,
///            [Kind::Integer, Kind::Plus, Kind::Integer, Kind::Multiply, Kind::Integer]);
/// ```
#[must_use]
pub fn lexer_config() -> LexerConfig<Kind> {
    LexerConfig::new(token_mappings())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::core::Lexer;

    fn lex(source: &str) -> Result<Vec<Token<Kind>>, LexError> {
        let config = lexer_config();
        Lexer::new(source, &config).tokenize()
    }

    fn kinds(source: &str) -> Vec<Kind> {
        lex(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn arithmetic_carries_values() {
        let tokens = lex("1+2*3").unwrap();
        let values: Vec<_> = tokens.iter().map(|t| t.value.clone()).collect();
        assert_eq!(values,
                   [Some(Literal::Int(1)), None, Some(Literal::Int(2)), None, Some(Literal::Int(3))]);
        assert_eq!(kinds("1+2*3"),
                   [Kind::Integer, Kind::Plus, Kind::Integer, Kind::Multiply, Kind::Integer]);
    }

    #[test]
    fn numbers() {
        assert_eq!(kinds("1 2.5 .5 3f 1_000"),
                   [Kind::Integer, Kind::Float, Kind::Float, Kind::Float, Kind::Integer]);
        assert_eq!(lex("1_000").unwrap()[0].value, Some(Literal::Int(1000)));
    }

    #[test]
    fn keywords_and_identifiers() {
        assert_eq!(kinds("var variable loop loops _x typeof"),
                   [Kind::Var,
                    Kind::Identifier,
                    Kind::Loop,
                    Kind::Identifier,
                    Kind::Identifier,
                    Kind::TypeOf]);
        assert_eq!(lex("_x").unwrap()[0].text(), Some("_x"));
    }

    #[test]
    fn strings() {
        let tokens = lex(r#"print "a \"b\" c""#).unwrap();
        assert_eq!(tokens[1].kind, Kind::String);
        assert_eq!(tokens[1].text(), Some(r#"a "b" c"#));
        assert_eq!(lex("\"open"), Err(LexError::UnterminatedString { line: 1 }));
    }

    #[test]
    fn comments_and_lines() {
        let tokens = lex("x // one\n/* two\nthree */ y").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 3);
    }

    #[test]
    fn lone_underscore_is_rejected() {
        assert!(matches!(lex("_"), Err(LexError::TokenizationFailed { character: '_', .. })));
    }
}
