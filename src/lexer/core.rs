use crate::{
    error::LexError,
    lexer::{
        config::LexerConfig,
        mapping::Lexeme,
        state::LexerState,
        token::{Token, TokenKind},
    },
};

/// A lazy token stream over one input.
///
/// The lexer borrows its [`LexerConfig`] and owns the cursor. Failures are
/// buffered in [`errors`](Self::errors) rather than thrown; after the first
/// failure the lexer halts and keeps reporting that failure.
#[derive(Debug)]
pub struct Lexer<'c, K> {
    config: &'c LexerConfig<K>,
    state:  LexerState,
    errors: Vec<LexError>,
}

impl<'c, K: TokenKind> Lexer<'c, K> {
    /// Creates a lexer over `text`.
    #[must_use]
    pub fn new(text: &str, config: &'c LexerConfig<K>) -> Self {
        Self { config,
               state: LexerState::new(text),
               errors: Vec::new() }
    }

    /// Failures buffered so far.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Returns `true` once lexing has failed.
    pub fn is_halted(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Produces the next token.
    ///
    /// Whitespace is skipped, then every mapping is tried in order. A mapping
    /// that yields [`Lexeme::Skip`] restarts the search. Once the input is
    /// exhausted, the end-of-stream token is returned on every call.
    ///
    /// # Errors
    /// Returns [`LexError::TokenizationFailed`] if no mapping matches a
    /// character, or the error of a failing factory. The error is also
    /// buffered and the lexer halts.
    pub fn next_token(&mut self) -> Result<Token<K>, LexError> {
        if let Some(error) = self.errors.first() {
            return Err(error.clone());
        }

        let config = self.config;
        'search: loop {
            if self.state.is_at_end() {
                return Ok(Token::end(self.state.line()));
            }
            if self.state.current().is_whitespace() {
                self.state.skip_whitespace();
                continue;
            }

            for mapping in config.mappings() {
                match mapping.process(&mut self.state) {
                    None => {},
                    Some(Ok(Lexeme::Token(token))) => {
                        tracing::trace!(kind = ?token.kind, line = token.line, "token");
                        return Ok(token);
                    },
                    Some(Ok(Lexeme::Skip)) => continue 'search,
                    Some(Err(error)) => return Err(self.fail(error)),
                }
            }

            let error = LexError::TokenizationFailed { character: self.state.current(),
                                                       position:  self.state.position(),
                                                       line:      self.state.line(), };
            return Err(self.fail(error));
        }
    }

    /// Returns the next token without consuming it.
    ///
    /// The cursor is snapshotted before and restored after the lookahead, and
    /// a failure during the lookahead is not kept in the buffer; the real
    /// [`next_token`](Self::next_token) call reports it.
    ///
    /// # Errors
    /// Returns the error that `next_token` would return.
    pub fn peek_token(&mut self) -> Result<Token<K>, LexError> {
        let checkpoint = self.state.checkpoint();
        let buffered = self.errors.len();

        let token = self.next_token();

        self.state.restore(checkpoint);
        self.errors.truncate(buffered);
        token
    }

    /// Collects every token up to, but not including, the end-of-stream
    /// token.
    ///
    /// # Errors
    /// Returns the first lexing failure.
    pub fn tokenize(&mut self) -> Result<Vec<Token<K>>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            if token.is_end() {
                return Ok(tokens);
            }
            tokens.push(token);
        }
    }

    fn fail(&mut self, error: LexError) -> LexError {
        tracing::debug!(%error, "lexing halted");
        self.errors.push(error.clone());
        error
    }
}
