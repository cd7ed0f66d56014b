//! # lexis
//!
//! lexis is a small imperative console language built on a reusable lexing
//! and parsing toolkit. The toolkit turns text into tokens with pluggable
//! predicate/factory rules and drives any grammar over them; the language
//! on top has runtime-typed variables, user functions and operators resolved
//! by the types of their operands.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{output::StdoutSink, session::Interpreter, value::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// grammar and traversed by the evaluator; nodes carry no behavior.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Each tier has its own error enum carrying the source line of the failure.
/// Lexing and parsing errors abort a unit; runtime errors are logged and stop
/// only the statement that raised them.
pub mod error;
/// A configurable lexer.
///
/// Token recognition is described by an ordered list of token mappings, each
/// pairing a predicate with a token factory, so the same engine lexes any
/// language. Supports comments, one-token lookahead and buffered errors.
pub mod lexer;
/// Grammar-driven recursive-descent parsing.
///
/// Provides the `Grammar` trait, the parser cursor grammars are written
/// against, and a `Parser` that binds a grammar to its lexical rules.
pub mod parser;
/// The console language.
///
/// Ties the toolkit to a concrete language: its tokens, its grammar, its
/// values and the evaluator that runs it.
///
/// # Responsibilities
/// - Defines the token kinds and lexical rules of the language.
/// - Parses units into the AST.
/// - Evaluates the AST against a session scope and function registry.
/// - Forwards printed values and errors to an output sink.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Runs one unit of source code and returns its result.
///
/// Printed output goes to standard output. The result is the value of the
/// last top-level statement that produced one.
///
/// # Errors
/// Returns the parse error if the source does not parse, or the first runtime
/// error logged while evaluating it.
///
/// # Examples
/// ```
/// use lexis::{get_result, interpreter::value::Value};
///
/// assert_eq!(get_result("1 + 2 * 3").unwrap(), Some(Value::Integer(7)));
///
/// // 'x' is not defined
/// assert!(get_result("var y = x + 1").is_err());
///
/// // trailing tokens never parse
/// assert!(get_result("print 1 2").is_err());
/// ```
pub fn get_result(source: &str) -> Result<Option<Value>, Error> {
    let mut interpreter = Interpreter::new(StdoutSink);
    let result = interpreter.run(source)?;

    if let Some(error) = interpreter.errors().first() {
        return Err(error.clone().into());
    }
    Ok(result)
}
