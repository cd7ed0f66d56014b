/// The console language's token kinds and lexical rules.
pub mod lexer;

/// The console language's grammar.
///
/// Recursive-descent rules that turn the token stream of one unit into an
/// AST, driven by the generic parser machinery.
pub mod parser;

/// The tree-walking evaluator.
///
/// Walks the AST with a variable scope and a function registry, resolving
/// every operator and call by the runtime types of its arguments.
pub mod evaluator;

/// Runtime values and types.
pub mod value;

/// The output collaborator.
///
/// Receives what `print` prints and the errors a unit logged.
pub mod output;

/// The interpreter session.
///
/// Combines a parser and an evaluator and runs one unit of source text at a
/// time.
pub mod session;
