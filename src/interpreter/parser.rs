/// The grammar root and statement sequences.
///
/// Defines `ConsoleGrammar`, which parses a whole unit, and the statement
/// sequence rule shared by units and blocks.
pub mod core;

/// Statement parsing.
///
/// Dispatches on the first token of a statement: blocks, declarations,
/// identifier-led statements, function definitions, `typeof`, `return`, `if`,
/// `loop` and `print`.
pub mod statement;

/// Expression parsing.
///
/// Implements the precedence levels from additive down to factors, with
/// function calls recognized one level above factors.
pub mod expression;

/// Utility functions for the parser.
///
/// Identifier extraction and comma-separated lists.
pub mod utils;

pub use self::core::{ConsoleGrammar, Instance, console_parser};
