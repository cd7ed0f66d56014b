use crate::{
    error::ParseError,
    lexer::{
        core::Lexer,
        token::{Token, TokenKind},
    },
    parser::core::ParseResult,
};

/// The deepest nesting of grammar rules entered through
/// [`ParserInstance::nested`] before parsing gives up.
pub const MAX_NESTING_DEPTH: usize = 128;

/// A one-token-lookahead cursor over a lexer.
///
/// `current` is the token the grammar is looking at. Consuming it pulls the
/// next one from the lexer, so at most one token beyond `current` is ever
/// materialized, and only by [`peek`](Self::peek).
///
/// The instance also counts how deeply the grammar has recursed. Rules that
/// recurse go through [`nested`](Self::nested) or [`enter`](Self::enter), so
/// that input nested past [`MAX_NESTING_DEPTH`] is a parse error rather than
/// a stack overflow. Trees built this way are never deeper than the limit,
/// which also bounds the recursion of whatever walks them.
#[derive(Debug)]
pub struct ParserInstance<'c, K> {
    lexer:    Lexer<'c, K>,
    current:  Token<K>,
    previous: Option<K>,
    depth:    usize,
}

impl<'c, K: TokenKind> ParserInstance<'c, K> {
    /// Creates an instance positioned on the first token of the input.
    ///
    /// # Errors
    /// Returns the lexing error if the first token cannot be read.
    pub fn new(mut lexer: Lexer<'c, K>) -> ParseResult<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer,
                  current,
                  previous: None,
                  depth: 0 })
    }

    /// The token under the cursor.
    pub const fn current(&self) -> &Token<K> {
        &self.current
    }

    /// The kind of the token consumed last, if any.
    pub fn previous(&self) -> Option<K> {
        self.previous
    }

    /// The line of the token under the cursor.
    pub const fn line(&self) -> usize {
        self.current.line
    }

    /// Returns `true` if the current token is of the given kind.
    pub fn at(&self, kind: K) -> bool {
        self.current.kind == kind
    }

    /// Consumes the current token if it has the expected kind.
    ///
    /// # Errors
    /// Returns [`ParseError::TokenMismatch`] if the current token has a
    /// different kind, or the lexing error raised while pulling the next
    /// token.
    pub fn consume(&mut self, expected: K) -> ParseResult<Token<K>> {
        if self.current.kind != expected {
            return Err(ParseError::TokenMismatch { expected: format!("{expected:?}"),
                                                   found:    format!("{:?}",
                                                                     self.current.kind),
                                                   line:     self.current.line, });
        }
        self.advance()
    }

    /// Consumes the current token whatever its kind and returns it.
    ///
    /// # Errors
    /// Returns the lexing error raised while pulling the next token.
    pub fn advance(&mut self) -> ParseResult<Token<K>> {
        let next = self.lexer.next_token()?;
        let token = std::mem::replace(&mut self.current, next);
        self.previous = Some(token.kind);
        Ok(token)
    }

    /// Returns the token after the current one without consuming anything.
    ///
    /// # Errors
    /// Returns the lexing error the lookahead ran into. The lexer does not
    /// keep that error; it is raised again once the token is really pulled.
    pub fn peek(&mut self) -> ParseResult<Token<K>> {
        Ok(self.lexer.peek_token()?)
    }

    /// Runs a grammar rule one nesting level deeper.
    ///
    /// # Errors
    /// Returns [`ParseError::NestingTooDeep`] if the limit is reached, or the
    /// error of the rule.
    pub fn nested<T>(&mut self, rule: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        self.enter()?;
        let result = rule(self);
        self.leave(1);
        result
    }

    /// Goes one nesting level deeper. Every successful call must be matched
    /// by [`leave`](Self::leave).
    ///
    /// # Errors
    /// Returns [`ParseError::NestingTooDeep`] if the limit is reached.
    pub fn enter(&mut self) -> ParseResult<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                    line:  self.current.line, });
        }
        self.depth += 1;
        Ok(())
    }

    /// Goes back up `levels` nesting levels.
    pub const fn leave(&mut self, levels: usize) {
        self.depth = self.depth.saturating_sub(levels);
    }

    /// The current nesting depth.
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Builds an [`ParseError::UnexpectedToken`] for the current token.
    pub fn unexpected(&self) -> ParseError {
        ParseError::UnexpectedToken { found: self.current.to_string(),
                                      line:  self.current.line, }
    }
}
