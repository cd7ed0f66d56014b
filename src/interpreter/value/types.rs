use crate::{
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::int_to_float,
};

/// A runtime type tag.
///
/// `Void` only appears as a function return type and `Object` only as a
/// parameter type of the seeded string operators, where it matches an
/// argument of any type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// No value; functions returning `void` yield `null`.
    Void,
    /// The type of `null`.
    Null,
    /// 64-bit integers, spelled `int`.
    Integer,
    /// Double precision floats, spelled `float`.
    Float,
    /// Booleans, spelled `bool`.
    Bool,
    /// Strings, spelled `string`.
    String,
    /// Any value.
    Object,
}

/// Conversions applied implicitly when a value meets a declared type.
/// Each entry is `(from, to)`; the table is not symmetric.
const CASTS: &[(Type, Type)] = &[(Type::Integer, Type::Float), (Type::Integer, Type::Bool)];

impl Type {
    /// Resolves a type name as written in source code.
    ///
    /// Only the declarable types have names; `null` and `object` cannot be
    /// written.
    ///
    /// # Example
    /// ```
    /// use lexis::interpreter::value::Type;
    ///
    /// assert_eq!(Type::from_name("int"), Some(Type::Integer));
    /// assert_eq!(Type::from_name("null"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "void" => Some(Self::Void),
            "int" => Some(Self::Integer),
            "float" => Some(Self::Float),
            "bool" => Some(Self::Bool),
            "string" => Some(Self::String),
            _ => None,
        }
    }

    /// The display name, as returned by `typeof`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Null => "null",
            Self::Integer => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Object => "object",
        }
    }

    /// Returns `true` if an implicit conversion from `self` to `target`
    /// exists.
    #[must_use]
    pub fn casts_to(self, target: Self) -> bool {
        CASTS.contains(&(self, target))
    }

    /// Fits `value` to this declared type.
    ///
    /// A value of the same type, and `null`, are returned unchanged. A value
    /// of another type is converted through the cast table. `Ok(None)` means
    /// no conversion exists and the caller decides which error to raise.
    ///
    /// # Errors
    /// Returns `LiteralTooLarge` if an integer cannot be represented exactly
    /// as a float.
    ///
    /// # Example
    /// ```
    /// use lexis::interpreter::value::{Type, Value};
    ///
    /// assert_eq!(Type::Float.fit(Value::Integer(2), 1).unwrap(), Some(Value::Float(2.0)));
    /// assert_eq!(Type::Bool.fit(Value::Integer(0), 1).unwrap(), Some(Value::Bool(false)));
    /// assert_eq!(Type::Integer.fit(Value::from("x"), 1).unwrap(), None);
    /// ```
    pub fn fit(self, value: Value, line: usize) -> EvalResult<Option<Value>> {
        let found = value.type_of();
        if found == self || value.is_null() {
            return Ok(Some(value));
        }
        if !found.casts_to(self) {
            return Ok(None);
        }

        let converted = match (value, self) {
            (Value::Integer(n), Self::Float) => Value::Float(int_to_float(n, line)?),
            (Value::Integer(n), Self::Bool) => Value::Bool(n != 0),
            _ => return Ok(None),
        };
        tracing::trace!(from = %found, to = %self, "implicit cast");
        Ok(Some(converted))
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn casts_are_one_directional() {
        assert!(Type::Integer.casts_to(Type::Float));
        assert!(!Type::Float.casts_to(Type::Integer));
        assert!(!Type::Bool.casts_to(Type::Integer));
    }

    #[test]
    fn null_fits_every_type() {
        for ty in [Type::Integer, Type::Float, Type::Bool, Type::String] {
            assert_eq!(ty.fit(Value::Null, 1).unwrap(), Some(Value::Null));
        }
    }

    #[test]
    fn oversized_integers_do_not_become_floats() {
        assert!(Type::Float.fit(Value::Integer(i64::MAX), 1).is_err());
    }
}
