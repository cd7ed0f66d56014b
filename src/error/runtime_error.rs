use thiserror::Error;

use crate::interpreter::value::Type;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Tried to use or assign an undeclared variable.
    #[error("Error on line {line}: Variable '{name}' has not been declared.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to declare a variable that already exists in the scope.
    #[error("Error on line {line}: Variable '{name}' already declared.")]
    VariableAlreadyDeclared {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An inferred declaration's initializer has no declarable type.
    #[error("Error on line {line}: There is no valid type for the value of '{name}'.")]
    CannotInferType {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A type name that the language does not know.
    #[error("Error on line {line}: Unknown type '{name}'.")]
    UnknownType {
        /// The type name as written.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A known type used where it is not allowed, such as a `void` variable.
    #[error("Error on line {line}: Type '{ty}' cannot be used here.")]
    InvalidType {
        /// The offending type.
        ty:   Type,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value's type differs from the declared type and no cast applies.
    #[error("Error on line {line}: Type mismatch. Expected {expected}, found {found}.")]
    TypeMismatch {
        /// The declared type.
        expected: Type,
        /// The runtime type of the value.
        found:    Type,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// No registry entry matches the name and argument types.
    #[error("Error on line {line}: No overload of '{name}' accepts ({types}).")]
    NoMatchingOverload {
        /// The function or operator name.
        name:  String,
        /// The argument types, comma separated.
        types: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A function with the same name and parameter types already exists.
    #[error("Error on line {line}: Function '{name}({types})' is already defined.")]
    FunctionAlreadyDefined {
        /// The function name.
        name:  String,
        /// The parameter types, comma separated.
        types: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A function produced a value its return type does not admit.
    #[error("Error on line {line}: Function '{name}' must return {expected}, but returned {found}.")]
    ReturnTypeMismatch {
        /// The function name.
        name:     String,
        /// The declared return type.
        expected: Type,
        /// The runtime type of the returned value.
        found:    Type,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A branch condition did not evaluate to a boolean.
    #[error("Error on line {line}: Condition must be a bool, found {found}.")]
    ExpectedBoolean {
        /// The runtime type of the condition.
        found: Type,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A loop count did not evaluate to an integer.
    #[error("Error on line {line}: Loops can only be given an int, found {found}.")]
    NonIntegerLoopCount {
        /// The runtime type of the count.
        found: Type,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The left side of an assignment is not a variable.
    #[error("Error on line {line}: You can only assign values to variables.")]
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An expression was expected to produce a value but produced none.
    #[error("Error on line {line}: Value missing.")]
    MissingValue {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operand had an unexpected type inside an operator implementation.
    #[error("Error on line {line}: Type error: {details}.")]
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Attempted division by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic overflowed.
    #[error("Error on line {line}: Integer overflow while trying to compute result.")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer is too large to be converted to a float exactly.
    #[error("Error on line {line}: Integer is too large to convert to float.")]
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string operation would build a string longer than allowed.
    #[error("Error on line {line}: Strings cannot be longer than {limit} bytes.")]
    StringTooLong {
        /// The maximum length in bytes.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Function calls nested deeper than the interpreter allows.
    #[error("Error on line {line}: Call depth limit of {limit} exceeded.")]
    CallDepthExceeded {
        /// The maximum call depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}
