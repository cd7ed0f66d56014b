/// The grammar capability and the reusable parser.
///
/// A [`core::Grammar`] is any value that can turn a token stream into an
/// output tree; [`core::Parser`] pairs one grammar with one lexer
/// configuration and parses whole inputs.
pub mod core;
/// The per-input parsing cursor.
///
/// Wraps a lexer with one token of lookahead and the `consume` primitive that
/// grammar rules are written against.
pub mod instance;

pub use self::core::{Grammar, ParseResult, Parser};
pub use instance::{MAX_NESTING_DEPTH, ParserInstance};
