use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{Type, Value},
    },
};

/// A declared variable: its type is fixed at declaration, its value is not.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// The declared type.
    pub ty:    Type,
    /// The current value.
    pub value: Value,
}

/// The variables visible to the code being evaluated.
///
/// Scopes do not nest. The session has one scope, and every user function
/// call evaluates in a brand new one, so a function body never sees the
/// variables of its caller.
#[derive(Debug, Default, Clone)]
pub struct Scope {
    variables: HashMap<String, Variable>,
}

impl Scope {
    /// Creates an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable.
    ///
    /// # Errors
    /// Returns `VariableAlreadyDeclared` if the name exists; the existing
    /// variable is left untouched.
    pub fn declare(&mut self, name: &str, ty: Type, value: Value, line: usize) -> EvalResult<()> {
        if self.variables.contains_key(name) {
            return Err(RuntimeError::VariableAlreadyDeclared { name: name.to_string(),
                                                               line });
        }
        self.variables.insert(name.to_string(), Variable { ty, value });
        Ok(())
    }

    /// Looks up a variable.
    ///
    /// # Errors
    /// Returns `UnknownVariable` if the name was never declared.
    pub fn get(&self, name: &str, line: usize) -> EvalResult<&Variable> {
        self.variables
            .get(name)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }

    /// Looks up a variable for assignment.
    ///
    /// # Errors
    /// Returns `UnknownVariable` if the name was never declared.
    pub fn get_mut(&mut self, name: &str, line: usize) -> EvalResult<&mut Variable> {
        self.variables
            .get_mut(name)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }

    /// Returns `true` if the name is declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redeclaration_keeps_first_value() {
        let mut scope = Scope::new();
        scope.declare("x", Type::Integer, Value::Integer(1), 1).unwrap();
        let error = scope.declare("x", Type::Integer, Value::Integer(2), 2).unwrap_err();

        assert_eq!(error,
                   RuntimeError::VariableAlreadyDeclared { name: "x".to_string(),
                                                           line: 2, });
        assert_eq!(scope.get("x", 3).unwrap().value, Value::Integer(1));
    }

    #[test]
    fn unknown_names_are_errors() {
        let mut scope = Scope::new();
        assert!(matches!(scope.get("y", 4), Err(RuntimeError::UnknownVariable { line: 4, .. })));
        assert!(scope.get_mut("y", 4).is_err());
    }
}
