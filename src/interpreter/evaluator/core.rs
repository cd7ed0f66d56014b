use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::{registry::Registry, scope::Scope},
        output::OutputSink,
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The deepest nesting of user function calls before evaluation gives up.
pub const MAX_CALL_DEPTH: usize = 128;

/// Stores the runtime evaluation state of one session.
///
/// The evaluator owns the variable scope, the function registry and the
/// error log, and writes `print` output to its sink. It is created once and
/// reused for every unit of the session, so variables and functions defined
/// by one unit are visible to the next.
///
/// ## Errors
///
/// Evaluation routines return `EvalResult` and propagate with `?`. At the
/// statement boundary ([`eval_unit`](Self::eval_unit)) a failure is appended
/// to the error log and evaluation continues with the next statement; side
/// effects of earlier statements are kept.
pub struct Evaluator<O> {
    pub(crate) scope:    Scope,
    pub(crate) registry: Registry,
    pub(crate) errors:   Vec<RuntimeError>,
    pub(crate) output:   O,
    pub(crate) depth:    usize,
}

impl<O: OutputSink> Evaluator<O> {
    /// Creates an evaluator with an empty scope and the built-in operator
    /// overloads.
    #[must_use]
    pub fn new(output: O) -> Self {
        Self { scope: Scope::new(),
               registry: Registry::with_builtins(),
               errors: Vec::new(),
               output,
               depth: 0 }
    }

    /// Evaluates the top-level block of a unit.
    ///
    /// Each top-level statement is evaluated in order; a failing statement
    /// is logged and does not stop the ones after it. A top-level `return`
    /// is evaluated like any other statement.
    ///
    /// # Returns
    /// The value of the last statement that produced one.
    ///
    /// # Example
    /// ```
    /// use lexis::{
    ///     ast::{LiteralValue, Node},
    ///     interpreter::{evaluator::core::Evaluator, output::BufferedSink, value::Value},
    /// };
    ///
    /// let mut evaluator = Evaluator::new(BufferedSink::new());
    /// let unit = Node::Block { statements: vec![Node::Literal { value: LiteralValue::Integer(7),
    ///                                                           line:  1, }],
    ///                          line:       1, };
    ///
    /// assert_eq!(evaluator.eval_unit(&unit), Some(Value::Integer(7)));
    /// assert!(evaluator.errors().is_empty());
    /// ```
    pub fn eval_unit(&mut self, unit: &Node) -> Option<Value> {
        let statements = match unit {
            Node::Block { statements, .. } => statements.as_slice(),
            other => std::slice::from_ref(other),
        };

        let mut result = None;
        for statement in statements {
            match self.eval(statement) {
                Ok(Some(value)) => result = Some(value),
                Ok(None) => {},
                Err(error) => self.log(error),
            }
        }
        result
    }

    /// Evaluates a node.
    ///
    /// This is the dispatcher of the evaluator: every node kind is routed to
    /// its evaluation routine.
    ///
    /// # Returns
    /// `Some(Value)` for nodes that produce a value, or `None` for statements
    /// that do not yield one.
    pub fn eval(&mut self, node: &Node) -> EvalResult<Option<Value>> {
        match node {
            Node::Literal { value, .. } => Ok(Some(Value::from(value))),
            Node::Variable { name, line } => self.eval_variable(name, *line).map(Some),
            Node::Unary { op, operand, line } => self.eval_unary(*op, operand, *line).map(Some),
            Node::Binary { left,
                           op,
                           right,
                           line, } => self.eval_binary(left, *op, right, *line).map(Some),
            Node::Assign { target, value, line } => {
                self.eval_assign(target, value, *line)?;
                Ok(None)
            },
            Node::VariableDeclaration { declared,
                                        variables,
                                        initializer,
                                        line, } => {
                self.eval_declaration(declared, variables, initializer.as_deref(), *line)?;
                Ok(None)
            },
            Node::Block { statements, .. } => self.eval_block(statements),
            Node::Branch { condition,
                           then_branch,
                           else_branch,
                           line, } => {
                self.eval_branch(condition, then_branch, else_branch.as_deref(), *line)
            },
            Node::Loop { count, body, line } => self.eval_loop(count, body, *line),
            Node::Print { expr, .. } => {
                self.eval_print(expr)?;
                Ok(None)
            },
            Node::TypeOf { expr, line } => self.eval_typeof(expr, *line).map(Some),
            Node::Return { expr, .. } => self.eval(expr),
            Node::FunctionDefinition(def) => {
                self.eval_function_definition(def)?;
                Ok(None)
            },
            Node::FunctionCall { name,
                                 arguments,
                                 line, } => self.eval_function_call(name, arguments, *line).map(Some),
            Node::NoOp { .. } => Ok(None),
        }
    }

    /// Evaluates a subexpression and ensures that it produces a value.
    ///
    /// Operands, arguments, conditions and initializers all need a value;
    /// a statement in their place (an assignment, a `print`) yields
    /// `MissingValue`.
    pub(crate) fn eval_value(&mut self, node: &Node) -> EvalResult<Value> {
        self.eval(node)?.ok_or(RuntimeError::MissingValue { line: node.line() })
    }

    /// Appends an error to the log.
    pub(crate) fn log(&mut self, error: RuntimeError) {
        tracing::debug!(%error, "runtime error");
        self.errors.push(error);
    }

    /// The errors logged since the last [`clear_errors`](Self::clear_errors).
    pub fn errors(&self) -> &[RuntimeError] {
        &self.errors
    }

    /// Empties the error log.
    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Hands every logged error to the output sink, then empties the log.
    pub fn report_errors(&mut self) {
        for error in self.errors.drain(..) {
            self.output.report(&error);
        }
    }

    /// The session's variable scope.
    pub const fn scope(&self) -> &Scope {
        &self.scope
    }

    /// The session's function registry.
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The output sink.
    pub const fn output(&self) -> &O {
        &self.output
    }

    /// The output sink, mutably.
    pub const fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{output::BufferedSink, parser::console_parser, value::Type};

    fn evaluator() -> Evaluator<BufferedSink> {
        Evaluator::new(BufferedSink::new())
    }

    fn run(evaluator: &mut Evaluator<BufferedSink>, source: &str) -> Option<Value> {
        let unit = console_parser().parse(source).unwrap();
        evaluator.eval_unit(&unit)
    }

    #[test]
    fn unit_value_is_the_last_value() {
        let mut evaluator = evaluator();
        assert_eq!(run(&mut evaluator, "1; 2 + 3; print 4"), Some(Value::Integer(5)));
        assert_eq!(run(&mut evaluator, "print 4"), None);
        assert_eq!(evaluator.output().lines, ["4", "4"]);
    }

    #[test]
    fn failing_statements_are_logged_and_skipped() {
        let mut evaluator = evaluator();
        let value = run(&mut evaluator, "var a = 1; a = missing; a = 2; typeof(a)");
        assert_eq!(value, Some(Value::from("int")));
        assert_eq!(evaluator.errors(),
                   [RuntimeError::UnknownVariable { name: "missing".to_string(),
                                                    line: 1, }]);
        assert_eq!(evaluator.scope().get("a", 1).unwrap().value, Value::Integer(2));
    }

    #[test]
    fn assignment_to_undeclared_does_not_evaluate_the_value() {
        let mut evaluator = evaluator();
        run(&mut evaluator, "func int noisy() { print \"ran\"; return 1 } y = noisy()");
        assert!(evaluator.output().lines.is_empty());
        assert!(matches!(evaluator.errors(), [RuntimeError::UnknownVariable { .. }]));
    }

    #[test]
    fn declarations_evaluate_the_initializer_once() {
        let mut evaluator = evaluator();
        run(&mut evaluator, "func int noisy() { print \"ran\"; return 1 } int a, b = noisy()");
        assert_eq!(evaluator.output().lines, ["ran"]);
        assert!(evaluator.scope().contains("a"));
        assert!(evaluator.scope().contains("b"));

        run(&mut evaluator, "int a, b = noisy()");
        assert_eq!(evaluator.output().lines, ["ran", "ran"]);
        assert_eq!(evaluator.errors().len(), 2);
    }

    #[test]
    fn statements_in_operand_position_have_no_value() {
        let mut evaluator = evaluator();
        run(&mut evaluator, "func void f() { } print 1 + f()");
        assert!(matches!(evaluator.errors(), [RuntimeError::NoMatchingOverload { .. }]));

        evaluator.clear_errors();
        run(&mut evaluator, "int x = 1; if (true) x = 2");
        assert!(evaluator.errors().is_empty());
    }

    #[test]
    fn branch_and_loop_values() {
        let mut evaluator = evaluator();
        assert_eq!(run(&mut evaluator, "if (true) 1 else 2"), Some(Value::Integer(1)));
        assert_eq!(run(&mut evaluator, "if (false) 1"), None);
        assert_eq!(run(&mut evaluator, "loop 3 { return 7 }"), Some(Value::Integer(7)));
        assert_eq!(run(&mut evaluator, "loop 0 7"), None);
    }

    #[test]
    fn failed_calls_restore_the_caller_scope() {
        let mut evaluator = evaluator();
        run(&mut evaluator, "var x = 1; func int f(int x) { return x / 0 } print f(5); print x");
        assert_eq!(evaluator.output().lines, ["1"]);
        assert_eq!(evaluator.errors(), [RuntimeError::DivisionByZero { line: 1 }]);
        assert_eq!(evaluator.depth, 0);
    }

    #[test]
    fn call_depth_is_limited() {
        let mut evaluator = evaluator();
        run(&mut evaluator, "func int f(int n) { return f(n + 1) } f(0)");
        assert_eq!(evaluator.errors(),
                   [RuntimeError::CallDepthExceeded { limit: MAX_CALL_DEPTH,
                                                      line:  1, }]);
        assert_eq!(evaluator.depth, 0);
    }

    #[test]
    fn invalid_function_definitions() {
        let mut evaluator = evaluator();
        run(&mut evaluator, "func int f(void v) 1");
        run(&mut evaluator, "func int g(int a, int a) a");
        run(&mut evaluator, "func number h() 1");
        assert!(matches!(evaluator.errors(),
                         [RuntimeError::InvalidType { ty: Type::Void, .. },
                          RuntimeError::VariableAlreadyDeclared { .. },
                          RuntimeError::UnknownType { .. }]));
        assert!(!evaluator.registry().contains("f"));
    }

    #[test]
    fn report_errors_drains_the_log() {
        let mut evaluator = evaluator();
        run(&mut evaluator, "if (1) print 1");
        evaluator.report_errors();
        assert!(evaluator.errors().is_empty());
        assert_eq!(evaluator.output().errors,
                   ["Error on line 1: Condition must be a bool, found int."]);
    }
}
