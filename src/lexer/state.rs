use crate::{error::LexError, lexer::token::Literal};

/// The character reported once the cursor has run past the input.
pub const END_OF_INPUT: char = '\0';

/// A saved cursor position, used to rewind after lookahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    position: usize,
    line:     usize,
}

/// The mutable cursor of one lexing session.
///
/// The state owns the input as characters so that positions are character
/// offsets rather than byte offsets. It is only ever moved forward through
/// [`advance`](Self::advance) and [`advance_by`](Self::advance_by), or rewound
/// to a [`Checkpoint`] by the lexer.
#[derive(Debug, Clone)]
pub struct LexerState {
    chars:    Vec<char>,
    position: usize,
    current:  char,
    line:     usize,
}

impl LexerState {
    /// Creates a cursor positioned at the first character of `text`.
    ///
    /// # Example
    /// ```
    /// use lexis::lexer::LexerState;
    ///
    /// let state = LexerState::new("ab");
    /// assert_eq!(state.current(), 'a');
    /// assert_eq!(state.peek(), 'b');
    /// ```
    #[must_use]
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let current = chars.first().copied().unwrap_or(END_OF_INPUT);
        Self { chars,
               position: 0,
               current,
               line: 1 }
    }

    /// The character under the cursor, or [`END_OF_INPUT`].
    pub const fn current(&self) -> char {
        self.current
    }

    /// The character offset of the cursor.
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The 1-based line of the cursor.
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns `true` once every character has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    /// Moves the cursor forward by one character.
    pub fn advance(&mut self) {
        self.advance_by(1);
    }

    /// Moves the cursor forward by `n` characters, stopping at the end of the
    /// input.
    pub fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            match self.chars.get(self.position) {
                Some('\n') => self.line += 1,
                Some(_) => {},
                None => break,
            }
            self.position += 1;
        }
        self.current = self.char_at(self.position);
    }

    /// Returns the character after the current one.
    pub fn peek(&self) -> char {
        self.peek_at(1)
    }

    /// Returns the character `n` positions ahead of the cursor without moving
    /// it. `peek_at(0)` is the current character.
    pub fn peek_at(&self, n: usize) -> char {
        self.char_at(self.position + n)
    }

    /// Returns `true` if the upcoming characters spell out `key`.
    ///
    /// # Example
    /// ```
    /// use lexis::lexer::LexerState;
    ///
    /// let state = LexerState::new("/* note */");
    /// assert!(state.match_key("/*"));
    /// assert!(!state.match_key("//"));
    /// ```
    pub fn match_key(&self, key: &str) -> bool {
        key.chars()
           .enumerate()
           .all(|(i, c)| !self.is_past_end(i) && self.peek_at(i) == c)
    }

    /// Skips whitespace under the cursor.
    pub fn skip_whitespace(&mut self) {
        while !self.is_at_end() && self.current.is_whitespace() {
            self.advance();
        }
    }

    /// Skips up to and including the next line break.
    pub fn skip_line(&mut self) {
        while !self.is_at_end() && self.current != '\n' {
            self.advance();
        }
        self.advance();
    }

    /// Skips up to and including `terminator`, or to the end of the input if
    /// it never occurs.
    pub fn skip_past(&mut self, terminator: &str) {
        while !self.is_at_end() && !self.match_key(terminator) {
            self.advance();
        }
        self.advance_by(terminator.chars().count());
    }

    /// Reads an identifier: letters, digits and underscores.
    pub fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while !self.is_at_end() && is_identifier_char(self.current) {
            result.push(self.current);
            self.advance();
        }
        result
    }

    /// Reads a double-quoted string literal, the cursor being on the opening
    /// quote. `\"` inside the literal yields a quote.
    ///
    /// # Errors
    /// Returns [`LexError::UnterminatedString`] if the input ends before the
    /// closing quote.
    pub fn read_string(&mut self) -> Result<String, LexError> {
        let line = self.line;
        self.advance();

        let mut result = String::new();
        while !self.is_at_end() && self.current != '"' {
            if self.current == '\\' && self.peek() == '"' {
                self.advance_by(2);
                result.push('"');
                continue;
            }
            result.push(self.current);
            self.advance();
        }

        if self.is_at_end() {
            return Err(LexError::UnterminatedString { line });
        }
        self.advance();

        Ok(result)
    }

    /// Reads a numeric literal.
    ///
    /// Digits may be separated by `_`. A fractional part or an `f`/`F` suffix
    /// makes the literal a float; otherwise it is an integer.
    ///
    /// # Errors
    /// Returns [`LexError::MalformedNumber`] if the digits do not fit the
    /// target type.
    ///
    /// # Example
    /// ```
    /// use lexis::lexer::{LexerState, Literal};
    ///
    /// assert_eq!(LexerState::new("1_000").read_number(), Ok(Literal::Int(1000)));
    /// assert_eq!(LexerState::new("2.5").read_number(), Ok(Literal::Float(2.5)));
    /// assert_eq!(LexerState::new("3f").read_number(), Ok(Literal::Float(3.0)));
    /// ```
    pub fn read_number(&mut self) -> Result<Literal, LexError> {
        let line = self.line;
        let mut text = self.read_digits();
        let mut is_float = false;

        if self.current == '.' {
            is_float = true;
            text.push('.');
            self.advance();
            text.push_str(&self.read_digits());
        }
        if matches!(self.current, 'f' | 'F') {
            is_float = true;
            self.advance();
        }

        let literal = if is_float {
            text.parse().ok().map(Literal::Float)
        } else {
            text.parse().ok().map(Literal::Int)
        };
        literal.ok_or(LexError::MalformedNumber { text, line })
    }

    pub(crate) const fn checkpoint(&self) -> Checkpoint {
        Checkpoint { position: self.position,
                     line:     self.line, }
    }

    pub(crate) fn restore(&mut self, checkpoint: Checkpoint) {
        self.position = checkpoint.position;
        self.line = checkpoint.line;
        self.current = self.char_at(self.position);
    }

    fn read_digits(&mut self) -> String {
        let mut result = String::new();
        while !self.is_at_end() && (self.current.is_ascii_digit() || self.current == '_') {
            if self.current != '_' {
                result.push(self.current);
            }
            self.advance();
        }
        result
    }

    fn is_past_end(&self, offset: usize) -> bool {
        self.position + offset >= self.chars.len()
    }

    fn char_at(&self, index: usize) -> char {
        self.chars.get(index).copied().unwrap_or(END_OF_INPUT)
    }
}

/// Returns `true` for characters that may continue an identifier.
pub fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_tracks_lines_and_sentinel() {
        let mut state = LexerState::new("a\nb");
        state.advance_by(2);
        assert_eq!(state.current(), 'b');
        assert_eq!(state.line(), 2);

        state.advance_by(5);
        assert!(state.is_at_end());
        assert_eq!(state.current(), END_OF_INPUT);
    }

    #[test]
    fn checkpoint_rewinds_cursor() {
        let mut state = LexerState::new("x\ny");
        let checkpoint = state.checkpoint();
        state.advance_by(2);
        state.restore(checkpoint);
        assert_eq!(state.current(), 'x');
        assert_eq!(state.line(), 1);
    }

    #[test]
    fn strings_unescape_quotes() {
        let mut state = LexerState::new(r#""say \"hi\"" rest"#);
        assert_eq!(state.read_string(), Ok("say \"hi\"".to_string()));
        assert_eq!(state.current(), ' ');
    }

    #[test]
    fn unterminated_string_is_an_error() {
        let mut state = LexerState::new("\"open");
        assert_eq!(state.read_string(), Err(LexError::UnterminatedString { line: 1 }));
    }

    #[test]
    fn leading_dot_is_a_float() {
        assert_eq!(LexerState::new(".5").read_number(), Ok(Literal::Float(0.5)));
    }

    #[test]
    fn oversized_integer_is_malformed() {
        let result = LexerState::new("99999999999999999999").read_number();
        assert!(matches!(result, Err(LexError::MalformedNumber { .. })));
    }
}
