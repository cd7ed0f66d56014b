use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        output::OutputSink,
        value::Value,
    },
};

impl<O: OutputSink> Evaluator<O> {
    /// Evaluates the statements of a block in order.
    ///
    /// The value of a `return` statement that is a direct child of the block
    /// becomes the block's value. It does not end the block: later
    /// statements still run, and a later `return` replaces the value.
    ///
    /// # Errors
    /// The first failing statement ends the block and its error propagates.
    pub(crate) fn eval_block(&mut self, statements: &[Node]) -> EvalResult<Option<Value>> {
        let mut result = None;
        for statement in statements {
            let value = self.eval(statement)?;
            if matches!(statement, Node::Return { .. }) {
                result = value;
            }
        }
        Ok(result)
    }

    /// Evaluates an `if` statement; exactly one side runs.
    ///
    /// # Errors
    /// `ExpectedBoolean` if the condition is not a bool.
    pub(crate) fn eval_branch(&mut self,
                              condition: &Node,
                              then_branch: &Node,
                              else_branch: Option<&Node>,
                              line: usize)
                              -> EvalResult<Option<Value>> {
        match self.eval_value(condition)? {
            Value::Bool(true) => self.eval(then_branch),
            Value::Bool(false) => else_branch.map_or(Ok(None), |node| self.eval(node)),
            other => Err(RuntimeError::ExpectedBoolean { found: other.type_of(),
                                                         line }),
        }
    }

    /// Evaluates a `loop` statement.
    ///
    /// The count is evaluated once; a count below one runs the body zero
    /// times.
    ///
    /// # Returns
    /// The value of the last iteration, if any.
    ///
    /// # Errors
    /// `NonIntegerLoopCount` if the count is not an int.
    pub(crate) fn eval_loop(&mut self, count: &Node, body: &Node, line: usize) -> EvalResult<Option<Value>> {
        let count = match self.eval_value(count)? {
            Value::Integer(n) => n,
            other => {
                return Err(RuntimeError::NonIntegerLoopCount { found: other.type_of(),
                                                               line });
            },
        };

        let mut result = None;
        for _ in 0..count.max(0) {
            result = self.eval(body)?;
        }
        Ok(result)
    }

    /// Evaluates a `print` statement and hands the value to the sink.
    pub(crate) fn eval_print(&mut self, expr: &Node) -> EvalResult<()> {
        let value = self.eval(expr)?;
        self.output.print(value.as_ref());
        Ok(())
    }

    /// Evaluates `typeof`, yielding the type name as a string.
    pub(crate) fn eval_typeof(&mut self, expr: &Node, line: usize) -> EvalResult<Value> {
        let value = self.eval(expr)?.ok_or(RuntimeError::MissingValue { line })?;
        Ok(Value::Str(value.type_of().name().to_string()))
    }
}
