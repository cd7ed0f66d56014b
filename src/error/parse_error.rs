use thiserror::Error;

use crate::error::LexError;

/// Represents all errors that can occur during parsing.
///
/// Token kinds are stored in their debug form so that the error does not
/// depend on the kind type of a particular grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The lexer failed while the parser pulled a token.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// `consume` found a different token kind than the grammar expected.
    #[error("Error on line {line}: Token mismatch. Expected {expected}, found {found}.")]
    TokenMismatch {
        /// The kind the grammar required.
        expected: String,
        /// The kind that was found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Found a token that cannot start or continue the construct being parsed.
    #[error("Error on line {line}: Unexpected token {found}.")]
    UnexpectedToken {
        /// The token encountered.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Grammar rules nested deeper than the parser allows.
    #[error("Error on line {line}: Nesting limit of {limit} exceeded.")]
    NestingTooDeep {
        /// The maximum nesting depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Variables declared with `var` have no initializer to infer a type from.
    #[error("Error on line {line}: Cannot infer the type of implicit variables {names} without a value.")]
    MissingInitializer {
        /// The declared names, comma separated.
        names: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}
