use std::{collections::HashSet, mem};

use crate::{
    ast::{FunctionDef, Node},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator, MAX_CALL_DEPTH},
            registry::{FunctionBody, FunctionEntry},
            scope::Scope,
        },
        output::OutputSink,
        value::{Type, Value},
    },
};

/// Resolves a type name written in source code.
pub(crate) fn resolve_type(name: &str, line: usize) -> EvalResult<Type> {
    Type::from_name(name).ok_or_else(|| RuntimeError::UnknownType { name: name.to_string(),
                                                                    line })
}

impl<O: OutputSink> Evaluator<O> {
    /// Registers a user-defined function.
    ///
    /// The return type may be `void`; parameter types may not. Parameter
    /// names must be distinct.
    ///
    /// # Errors
    /// - `UnknownType` for a type name the language does not know.
    /// - `InvalidType` for a `void` parameter.
    /// - `VariableAlreadyDeclared` for a repeated parameter name.
    /// - `FunctionAlreadyDefined` if the signature exists.
    pub(crate) fn eval_function_definition(&mut self, def: &FunctionDef) -> EvalResult<()> {
        let return_type = resolve_type(&def.return_type, def.line)?;

        let mut seen = HashSet::new();
        let mut types = Vec::with_capacity(def.params.len());
        for param in &def.params {
            let ty = resolve_type(&param.type_name, def.line)?;
            if ty == Type::Void {
                return Err(RuntimeError::InvalidType { ty,
                                                       line: def.line });
            }
            if !seen.insert(param.name.as_str()) {
                return Err(RuntimeError::VariableAlreadyDeclared { name: param.name.clone(),
                                                                   line: def.line, });
            }
            types.push(ty);
        }

        let entry = FunctionEntry { name: def.name.clone(),
                                    params: types,
                                    return_type,
                                    body: FunctionBody::User { params: def.params
                                                                          .iter()
                                                                          .map(|p| p.name.clone())
                                                                          .collect(),
                                                               body:   (*def.body).clone(), } };
        self.registry.register(entry, def.line)
    }

    /// Evaluates a function call.
    ///
    /// Arguments are evaluated left to right, then the overload is selected
    /// by the argument types and invoked.
    ///
    /// # Errors
    /// The first failing argument, `NoMatchingOverload`, or any error of the
    /// invoked function.
    pub(crate) fn eval_function_call(&mut self,
                                     name: &str,
                                     arguments: &[Node],
                                     line: usize)
                                     -> EvalResult<Value> {
        let args = arguments.iter()
                            .map(|arg| self.eval_value(arg))
                            .collect::<EvalResult<Vec<_>>>()?;
        let types: Vec<Type> = args.iter().map(Value::type_of).collect();

        let entry = self.registry.resolve(name, &types, line)?;
        self.invoke(&entry, args, line)
    }

    /// Invokes a resolved overload with already evaluated arguments.
    pub(crate) fn invoke(&mut self,
                         entry: &FunctionEntry,
                         args: Vec<Value>,
                         line: usize)
                         -> EvalResult<Value> {
        match &entry.body {
            FunctionBody::Native(func) => func(&args, line),
            FunctionBody::User { params, body } => self.call_user(entry, params, body, args, line),
        }
    }

    /// Runs the body of a user function in a fresh scope.
    ///
    /// The caller's scope is set aside for the duration of the call and
    /// restored afterwards, whether the body succeeded or not.
    fn call_user(&mut self,
                 entry: &FunctionEntry,
                 params: &[String],
                 body: &Node,
                 args: Vec<Value>,
                 line: usize)
                 -> EvalResult<Value> {
        if self.depth >= MAX_CALL_DEPTH {
            return Err(RuntimeError::CallDepthExceeded { limit: MAX_CALL_DEPTH,
                                                         line });
        }

        let mut scope = Scope::new();
        for ((name, ty), value) in params.iter().zip(&entry.params).zip(args) {
            scope.declare(name, *ty, value, line)?;
        }

        tracing::trace!(name = %entry.name, depth = self.depth + 1, "call");
        let caller = mem::replace(&mut self.scope, scope);
        self.depth += 1;
        let result = self.eval(body);
        self.depth -= 1;
        self.scope = caller;

        Self::check_return(entry, result?, line)
    }

    /// Fits a function result to the declared return type.
    ///
    /// `void` functions yield `null`, as does a body that returned nothing.
    /// Any other result must have the return type or cast to it.
    fn check_return(entry: &FunctionEntry, result: Option<Value>, line: usize) -> EvalResult<Value> {
        if entry.return_type == Type::Void {
            return Ok(Value::Null);
        }
        let Some(value) = result else {
            return Ok(Value::Null);
        };

        let found = value.type_of();
        entry.return_type
             .fit(value, line)?
             .ok_or_else(|| RuntimeError::ReturnTypeMismatch { name: entry.name.clone(),
                                                               expected: entry.return_type,
                                                               found,
                                                               line })
    }
}
