/// The lexer engine itself.
///
/// Drives a [`state::LexerState`] through an ordered list of
/// [`mapping::TokenMapping`]s, buffering failures instead of returning early,
/// and offers one-token lookahead by snapshotting the cursor.
pub mod core;
/// Lexer configuration.
///
/// Bundles the token mappings of one language with its comment delimiters and
/// fixes the order in which mappings are tried.
pub mod config;
/// Token mappings.
///
/// A mapping pairs a recognition predicate with a factory that materializes
/// the token. Keyed mappings match a literal string; predicate mappings decide
/// for themselves and advance the cursor on their own.
pub mod mapping;
/// The cursor over the raw input.
///
/// Owns the input characters, the current position and line, and provides the
/// scanning helpers (`read_number`, `read_identifier`, `read_string`) that
/// token factories reuse.
pub mod state;
/// Tokens and literal values.
pub mod token;

pub use config::LexerConfig;
pub use self::core::Lexer;
pub use mapping::{Lexeme, TokenMapping};
pub use state::LexerState;
pub use token::{Literal, Token, TokenKind};
