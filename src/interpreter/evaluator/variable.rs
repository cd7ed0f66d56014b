use crate::{
    ast::{DeclaredType, Node},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            function::resolve_type,
        },
        output::OutputSink,
        value::{Type, Value},
    },
};

impl<O: OutputSink> Evaluator<O> {
    /// Reads a variable.
    pub(crate) fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        Ok(self.scope.get(name, line)?.value.clone())
    }

    /// Evaluates an assignment.
    ///
    /// The target must be a declared variable. A value of another type than
    /// the declared one is converted through the cast table.
    ///
    /// # Errors
    /// - `InvalidAssignmentTarget` if the target is not a variable.
    /// - `UnknownVariable` if it was never declared; the value is then not
    ///   evaluated.
    /// - `TypeMismatch` if no cast applies.
    pub(crate) fn eval_assign(&mut self, target: &Node, value: &Node, line: usize) -> EvalResult<()> {
        let Node::Variable { name, .. } = target else {
            return Err(RuntimeError::InvalidAssignmentTarget { line });
        };
        let expected = self.scope.get(name, line)?.ty;

        let value = self.eval_value(value)?;
        let value = fit_declared(expected, value, line)?;
        self.scope.get_mut(name, line)?.value = value;
        Ok(())
    }

    /// Evaluates a variable declaration.
    ///
    /// The type name is resolved and the initializer evaluated once, before
    /// any variable is declared; a failure there fails the whole statement.
    /// The initializer is not re-run per name, so its side effects happen
    /// once even for `int a, b = f()`, and they happen even if every name
    /// turns out to be declared already. Afterwards each name is declared on
    /// its own: a name that cannot be declared is logged and the remaining
    /// names are still declared.
    pub(crate) fn eval_declaration(&mut self,
                                   declared: &DeclaredType,
                                   variables: &[String],
                                   initializer: Option<&Node>,
                                   line: usize)
                                   -> EvalResult<()> {
        let declared = match declared {
            DeclaredType::Inferred => None,
            DeclaredType::Named(name) => {
                let ty = resolve_type(name, line)?;
                if ty == Type::Void {
                    return Err(RuntimeError::InvalidType { ty, line });
                }
                Some(ty)
            },
        };
        let value = initializer.map(|node| self.eval_value(node)).transpose()?;

        for name in variables {
            if let Err(error) = self.declare_one(name, declared, value.clone(), line) {
                self.log(error);
            }
        }
        Ok(())
    }

    fn declare_one(&mut self,
                   name: &str,
                   declared: Option<Type>,
                   value: Option<Value>,
                   line: usize)
                   -> EvalResult<()> {
        if self.scope.contains(name) {
            return Err(RuntimeError::VariableAlreadyDeclared { name: name.to_string(),
                                                               line });
        }

        let (ty, value) = match (declared, value) {
            (Some(ty), None) => (ty, Value::Null),
            (Some(ty), Some(value)) => (ty, fit_declared(ty, value, line)?),
            (None, Some(value)) if !value.is_null() => (value.type_of(), value),
            (None, _) => {
                return Err(RuntimeError::CannotInferType { name: name.to_string(),
                                                           line });
            },
        };
        self.scope.declare(name, ty, value, line)
    }
}

/// Fits a value to a variable's declared type or reports the mismatch.
fn fit_declared(expected: Type, value: Value, line: usize) -> EvalResult<Value> {
    let found = value.type_of();
    expected.fit(value, line)?
            .ok_or(RuntimeError::TypeMismatch { expected,
                                                found,
                                                line })
}
