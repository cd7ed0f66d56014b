use std::fmt;

use crate::{
    error::LexError,
    lexer::{
        state::{LexerState, is_identifier_char},
        token::{Token, TokenKind},
    },
};

/// Decides whether a mapping applies at the current cursor position.
pub type Predicate = Box<dyn Fn(&LexerState) -> bool>;

/// Materializes the token of a mapping whose predicate matched.
pub type Factory<K> = Box<dyn Fn(&mut LexerState) -> Result<Lexeme<K>, LexError>>;

/// What a factory produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Lexeme<K> {
    /// A token for the parser.
    Token(Token<K>),
    /// Input that yields no token (a comment); the lexer tries again.
    Skip,
}

/// One lexical rule: a recognition predicate paired with a token factory.
///
/// Keyed mappings match a literal key and the lexer advances past the key
/// after the factory ran. Predicate mappings have no key; their factory is
/// responsible for consuming input.
pub struct TokenMapping<K> {
    key:       Option<String>,
    predicate: Predicate,
    factory:   Factory<K>,
}

impl<K: TokenKind + 'static> TokenMapping<K> {
    /// A punctuation mapping: matches `key` literally and emits `kind`.
    #[must_use]
    pub fn literal(key: &str, kind: K) -> Self {
        Self::keyed(key, move |state| Ok(Lexeme::Token(Token::new(kind, state.line()))))
    }

    /// A keyword mapping: like [`literal`](Self::literal), but only when the
    /// key is not immediately followed by an identifier character, so that
    /// `iffy` is never split into `if` and `fy`.
    #[must_use]
    pub fn keyword(key: &str, kind: K) -> Self {
        let owned = key.to_string();
        let length = key.chars().count();
        Self { key:       Some(owned.clone()),
               predicate: Box::new(move |state| {
                   state.match_key(&owned) && !is_identifier_char(state.peek_at(length))
               }),
               factory:   Box::new(move |state| {
                   Ok(Lexeme::Token(Token::new(kind, state.line())))
               }), }
    }

    /// A keyed mapping with a custom factory.
    pub fn keyed<F>(key: &str, factory: F) -> Self
        where F: Fn(&mut LexerState) -> Result<Lexeme<K>, LexError> + 'static
    {
        let owned = key.to_string();
        Self { key:       Some(owned.clone()),
               predicate: Box::new(move |state| state.match_key(&owned)),
               factory:   Box::new(factory), }
    }

    /// A predicate mapping whose factory consumes its own input.
    pub fn predicate<P, F>(predicate: P, factory: F) -> Self
        where P: Fn(&LexerState) -> bool + 'static,
              F: Fn(&mut LexerState) -> Result<Lexeme<K>, LexError> + 'static
    {
        Self { key:       None,
               predicate: Box::new(predicate),
               factory:   Box::new(factory), }
    }

    /// Skips a comment running from `start` to the end of the line.
    #[must_use]
    pub fn line_comment(start: &str) -> Self {
        let start = start.to_string();
        Self::predicate(move |state| state.match_key(&start),
                        |state| {
                            state.skip_line();
                            Ok(Lexeme::Skip)
                        })
    }

    /// Skips a comment running from `start` to the next `end`.
    #[must_use]
    pub fn block_comment(start: &str, end: &str) -> Self {
        let start = start.to_string();
        let end = end.to_string();
        let skip = start.chars().count();
        Self::predicate(move |state| state.match_key(&start),
                        move |state| {
                            state.advance_by(skip);
                            state.skip_past(&end);
                            Ok(Lexeme::Skip)
                        })
    }
}

impl<K> TokenMapping<K> {
    /// The literal key, for keyed mappings.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Runs the mapping at the current cursor position.
    ///
    /// Returns `None` if the predicate does not match. For keyed mappings the
    /// cursor is moved past the key once the factory succeeded.
    pub(crate) fn process(&self, state: &mut LexerState) -> Option<Result<Lexeme<K>, LexError>> {
        if !(self.predicate)(state) {
            return None;
        }

        let lexeme = (self.factory)(state);
        if let Some(key) = &self.key
           && lexeme.is_ok()
        {
            state.advance_by(key.chars().count());
        }
        Some(lexeme)
    }
}

impl<K> fmt::Debug for TokenMapping<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenMapping").field("key", &self.key).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Kind {
        End,
        If,
        Plus,
    }

    impl TokenKind for Kind {
        const END: Self = Self::End;
    }

    #[test]
    fn keyed_mapping_advances_past_key() {
        let mapping = TokenMapping::literal("+", Kind::Plus);
        let mut state = LexerState::new("+1");
        let lexeme = mapping.process(&mut state);
        assert_eq!(lexeme, Some(Ok(Lexeme::Token(Token::new(Kind::Plus, 1)))));
        assert_eq!(state.current(), '1');
    }

    #[test]
    fn keyword_requires_word_boundary() {
        let mapping = TokenMapping::keyword("if", Kind::If);
        assert!(mapping.process(&mut LexerState::new("iffy")).is_none());
        assert!(mapping.process(&mut LexerState::new("if(")).is_some());
    }

    #[test]
    fn comments_are_skipped() {
        let mapping: TokenMapping<Kind> = TokenMapping::block_comment("/*", "*/");
        let mut state = LexerState::new("/* a\nb */+");
        assert_eq!(mapping.process(&mut state), Some(Ok(Lexeme::Skip)));
        assert_eq!(state.current(), '+');
        assert_eq!(state.line(), 2);
    }
}
