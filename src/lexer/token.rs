use std::fmt;

/// The kind space a lexer produces.
///
/// Any small `Copy` enum can serve as a token kind; it only has to name the
/// kind reported once the input is exhausted.
pub trait TokenKind: Copy + Eq + fmt::Debug {
    /// The end-of-stream kind.
    const END: Self;
}

/// A literal value carried by a token.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// An integer literal such as `42`.
    Int(i64),
    /// A floating-point literal such as `2.5` or `3f`.
    Float(f64),
    /// A boolean literal.
    Bool(bool),
    /// A string literal, or the text of an identifier.
    Str(String),
}

/// A token produced by the lexer.
///
/// Tokens are handed to the parser one at a time and are not retained by the
/// lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<K> {
    /// The kind of the token.
    pub kind:  K,
    /// The literal value, for tokens that carry one.
    pub value: Option<Literal>,
    /// The source line the token starts on.
    pub line:  usize,
}

impl<K: TokenKind> Token<K> {
    /// Creates a token without a literal value.
    pub const fn new(kind: K, line: usize) -> Self {
        Self { kind,
               value: None,
               line }
    }

    /// Creates a token carrying a literal value.
    pub const fn with_value(kind: K, value: Literal, line: usize) -> Self {
        Self { kind,
               value: Some(value),
               line }
    }

    /// Creates the end-of-stream token.
    pub const fn end(line: usize) -> Self {
        Self::new(K::END, line)
    }

    /// Returns `true` if this is the end-of-stream token.
    pub fn is_end(&self) -> bool {
        self.kind == K::END
    }

    /// Returns the carried text for string-valued tokens (identifiers and
    /// string literals).
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            Some(Literal::Str(s)) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s:?}"),
        }
    }
}

impl<K: fmt::Debug> fmt::Display for Token<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{:?}({value})", self.kind),
            None => write!(f, "{:?}", self.kind),
        }
    }
}
