use std::cmp::Reverse;

use crate::lexer::{mapping::TokenMapping, token::TokenKind};

/// Default line comment opener.
pub const LINE_COMMENT_START: &str = "//";
/// Default block comment opener.
pub const BLOCK_COMMENT_START: &str = "/*";
/// Default block comment terminator.
pub const BLOCK_COMMENT_END: &str = "*/";

/// The rule set of one language.
///
/// Mappings are tried in a fixed order: comment mappings first, then keyed
/// mappings from the longest key to the shortest (so that `==` is never read
/// as two `=`), then predicate mappings in the order they were given.
#[derive(Debug)]
pub struct LexerConfig<K> {
    mappings: Vec<TokenMapping<K>>,
}

impl<K: TokenKind + 'static> LexerConfig<K> {
    /// Creates a configuration with the default `//` and `/* */` comments.
    ///
    /// # Example
    /// ```
    /// use lexis::lexer::{LexerConfig, TokenKind, TokenMapping};
    ///
    /// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// enum Kind {
    ///     End,
    ///     Assign,
    ///     Equals,
    /// }
    ///
    /// impl TokenKind for Kind {
    ///     const END: Self = Self::End;
    /// }
    ///
    /// let config = LexerConfig::new(vec![TokenMapping::literal("=", Kind::Assign),
    ///                                    TokenMapping::literal("==", Kind::Equals)]);
    /// let keys: Vec<_> = config.mappings().iter().filter_map(|m| m.key()).collect();
    /// assert_eq!(keys, ["==", "="]);
    /// ```
    #[must_use]
    pub fn new(mappings: Vec<TokenMapping<K>>) -> Self {
        Self::with_comments(mappings,
                            Some(LINE_COMMENT_START),
                            Some((BLOCK_COMMENT_START, BLOCK_COMMENT_END)))
    }

    /// Creates a configuration with custom comment delimiters; `None`
    /// disables that kind of comment.
    #[must_use]
    pub fn with_comments(mut mappings: Vec<TokenMapping<K>>,
                         line_comment: Option<&str>,
                         block_comment: Option<(&str, &str)>)
                         -> Self {
        mappings.sort_by_key(|mapping| Reverse(mapping.key().map_or(0, |k| k.chars().count())));

        let mut ordered = Vec::with_capacity(mappings.len() + 2);
        if let Some(start) = line_comment {
            ordered.push(TokenMapping::line_comment(start));
        }
        if let Some((start, end)) = block_comment {
            ordered.push(TokenMapping::block_comment(start, end));
        }
        ordered.extend(mappings);

        Self { mappings: ordered }
    }

    /// Creates a configuration that recognizes no comments.
    #[must_use]
    pub fn without_comments(mappings: Vec<TokenMapping<K>>) -> Self {
        Self::with_comments(mappings, None, None)
    }
}

impl<K> LexerConfig<K> {
    /// The mappings in the order the lexer tries them.
    pub fn mappings(&self) -> &[TokenMapping<K>] {
        &self.mappings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{core::Lexer, mapping::Lexeme, token::Token};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Kind {
        End,
        Slash,
        Word,
    }

    impl TokenKind for Kind {
        const END: Self = Self::End;
    }

    fn mappings() -> Vec<TokenMapping<Kind>> {
        vec![TokenMapping::literal("/", Kind::Slash),
             TokenMapping::predicate(|s| s.current().is_alphabetic(), |s| {
                 let line = s.line();
                 s.read_identifier();
                 Ok(Lexeme::Token(Token::new(Kind::Word, line)))
             })]
    }

    fn kinds(config: &LexerConfig<Kind>, source: &str) -> Vec<Kind> {
        Lexer::new(source, config).tokenize().unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn default_comments_are_skipped() {
        let config = LexerConfig::new(mappings());
        assert_eq!(config.mappings().len(), 4);
        assert_eq!(kinds(&config, "a // b\nc /* d */ e"), [Kind::Word, Kind::Word, Kind::Word]);
    }

    #[test]
    fn comments_can_be_disabled() {
        let config = LexerConfig::without_comments(mappings());
        assert_eq!(config.mappings().len(), 2);
        assert_eq!(kinds(&config, "a // b"),
                   [Kind::Word, Kind::Slash, Kind::Slash, Kind::Word]);
    }

    #[test]
    fn custom_line_comment() {
        let config = LexerConfig::with_comments(mappings(), Some("#"), None);
        assert_eq!(kinds(&config, "a # b\n/ c"), [Kind::Word, Kind::Slash, Kind::Word]);
    }
}
