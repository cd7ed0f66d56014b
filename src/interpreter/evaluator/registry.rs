use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::{builtin::BUILTIN_TABLE, core::EvalResult},
        value::{Type, Value},
    },
};

/// Type alias for native function handlers.
///
/// A native function receives its evaluated arguments, already matched
/// against its parameter types, and the line number of the call.
pub type NativeFn = fn(&[Value], usize) -> EvalResult<Value>;

/// The implementation behind a registered signature.
#[derive(Debug, Clone)]
pub enum FunctionBody {
    /// A function implemented in Rust; the seeded operators.
    Native(NativeFn),
    /// A function defined in the language.
    User {
        /// Parameter names, in the order of the signature's types.
        params: Vec<String>,
        /// The body block.
        body:   Node,
    },
}

/// One overload: a name, a parameter type tuple and an implementation.
#[derive(Debug, Clone)]
pub struct FunctionEntry {
    /// The function or operator name, e.g. `op_Add`.
    pub name:        String,
    /// The parameter types that select this overload.
    pub params:      Vec<Type>,
    /// The declared return type.
    pub return_type: Type,
    /// The implementation.
    pub body:        FunctionBody,
}

/// Every callable of a session, keyed by name and parameter types.
///
/// Operators and user functions live in the same table: `a + b` is a call of
/// `op_Add` with the types of `a` and `b`. Lookup is an exact match on the
/// type tuple; no widening happens here.
#[derive(Debug, Default)]
pub struct Registry {
    functions: HashMap<String, Vec<Rc<FunctionEntry>>>,
}

/// Formats a type tuple for error messages, e.g. `int, float`.
pub(crate) fn type_list(types: &[Type]) -> String {
    types.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

impl Registry {
    /// Creates a registry without any function.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a registry seeded with the built-in operator overloads.
    ///
    /// # Example
    /// ```
    /// use lexis::interpreter::{evaluator::registry::Registry, value::Type};
    ///
    /// let registry = Registry::with_builtins();
    /// assert!(registry.lookup("op_Add", &[Type::Integer, Type::Float]).is_some());
    /// assert!(registry.lookup("op_Add", &[Type::Bool, Type::Bool]).is_none());
    /// ```
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        for def in BUILTIN_TABLE {
            let entry = FunctionEntry { name:        def.name.to_string(),
                                        params:      def.params.to_vec(),
                                        return_type: def.return_type,
                                        body:        FunctionBody::Native(def.func), };
            registry.functions.entry(entry.name.clone()).or_default().push(Rc::new(entry));
        }
        registry
    }

    /// Adds an overload.
    ///
    /// # Errors
    /// Returns `FunctionAlreadyDefined` if an overload with the same name and
    /// parameter types exists, built-in or not.
    pub fn register(&mut self, entry: FunctionEntry, line: usize) -> EvalResult<()> {
        if self.lookup(&entry.name, &entry.params).is_some() {
            return Err(RuntimeError::FunctionAlreadyDefined { name: entry.name,
                                                              types: type_list(&entry.params),
                                                              line });
        }
        tracing::debug!(name = %entry.name, params = %type_list(&entry.params), "function registered");
        self.functions.entry(entry.name.clone()).or_default().push(Rc::new(entry));
        Ok(())
    }

    /// Finds the overload of `name` whose parameter types equal `types`.
    #[must_use]
    pub fn lookup(&self, name: &str, types: &[Type]) -> Option<Rc<FunctionEntry>> {
        self.functions
            .get(name)?
            .iter()
            .find(|entry| entry.params == types)
            .cloned()
    }

    /// Like [`lookup`](Self::lookup), but a miss is an error.
    ///
    /// # Errors
    /// Returns `NoMatchingOverload` naming the function and argument types.
    pub fn resolve(&self, name: &str, types: &[Type], line: usize) -> EvalResult<Rc<FunctionEntry>> {
        self.lookup(name, types)
            .ok_or_else(|| RuntimeError::NoMatchingOverload { name: name.to_string(),
                                                              types: type_list(types),
                                                              line })
    }

    /// Returns `true` if at least one overload of `name` exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// The overloads of `name`, in registration order.
    pub fn overloads(&self, name: &str) -> impl Iterator<Item = &FunctionEntry> {
        self.functions.get(name).into_iter().flatten().map(|entry| &**entry)
    }
}
