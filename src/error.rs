/// Lexing errors.
///
/// Raised by the lexer when no token mapping recognizes a character or when a
/// token factory rejects its input. Lexing errors are buffered by the lexer
/// and end the parse of the current unit.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while the grammar drives the parser:
/// token mismatches, tokens that start no valid construct, and declarations
/// whose type cannot be inferred. A parse error aborts the whole unit.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unknown or
/// re-declared variables, type mismatches, missing overloads, invalid control
/// flow operands and arithmetic failures. Runtime errors are logged by the
/// evaluator and stop only the statement that raised them.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error produced while running a unit end to end.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The unit did not parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A statement of the unit failed during evaluation.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
