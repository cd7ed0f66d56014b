use crate::{ast::LiteralValue, interpreter::value::types::Type};

/// Represents a runtime value in the interpreter.
///
/// Values are produced by literals, variables, operators and function calls.
/// They are cloned freely; strings are the only heap-backed variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absence of a value. Assignable to variables of any type.
    Null,
    /// A 64-bit integer value.
    Integer(i64),
    /// A double precision floating-point value.
    Float(f64),
    /// A boolean value (`true` or `false`).
    /// Used as conditions in `if` statements, where the condition must
    /// evaluate to `Bool`.
    Bool(bool),
    /// A string value.
    Str(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl Value {
    /// The runtime type of the value.
    ///
    /// # Example
    /// ```
    /// use lexis::interpreter::value::{Type, Value};
    ///
    /// assert_eq!(Value::Integer(1).type_of(), Type::Integer);
    /// assert_eq!(Value::from("hi").type_of().to_string(), "string");
    /// ```
    #[must_use]
    pub const fn type_of(&self) -> Type {
        match self {
            Self::Null => Type::Null,
            Self::Integer(_) => Type::Integer,
            Self::Float(_) => Type::Float,
            Self::Bool(_) => Type::Bool,
            Self::Str(_) => Type::String,
        }
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Null => Self::Null,
            LiteralValue::Integer(n) => Self::Integer(*n),
            LiteralValue::Float(x) => Self::Float(*x),
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Str(s) => Self::Str(s.clone()),
        }
    }
}
