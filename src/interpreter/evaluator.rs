/// Core evaluation logic.
///
/// Holds the `Evaluator` session state (scope, registry, error log and
/// output sink) and the dispatcher that routes every node kind to its
/// evaluation routine.
pub mod core;

/// The variable scope.
///
/// Maps names to their declared type and current value. Function calls get a
/// fresh scope of their own.
pub mod scope;

/// The function and operator registry.
///
/// Stores overloads keyed by name and parameter type tuple and resolves calls
/// by exact match.
pub mod registry;

/// Built-in operator overloads.
///
/// The seeded arithmetic, concatenation, repetition and negation overloads,
/// defined as a static table.
pub mod builtin;

/// Operator evaluation.
///
/// Evaluates operands and dispatches binary and unary operators through the
/// registry.
pub mod operator;

/// Function definition and invocation.
///
/// Registers user functions and calls any registered overload, binding
/// arguments in a fresh scope and checking the result against the declared
/// return type.
pub mod function;

/// Variable declaration, lookup and assignment.
pub mod variable;

/// Control flow and statements.
///
/// Blocks, branches, loops, `print`, `typeof` and `return`.
pub mod control;
