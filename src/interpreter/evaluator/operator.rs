use crate::{
    ast::{BinaryOperator, Node, UnaryOperator},
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        output::OutputSink,
        value::{Type, Value},
    },
};

impl<O: OutputSink> Evaluator<O> {
    /// Evaluates a binary operation.
    ///
    /// Both operands are evaluated left to right, then the overload of the
    /// operator's registry name is selected by the operand types. An exact
    /// match wins. For `+` and `*` with a string on the left and no exact
    /// overload, the right operand is looked up as `object`, which is where
    /// the seeded concatenation and repetition live.
    ///
    /// # Errors
    /// `NoMatchingOverload` naming the actual operand types if no overload
    /// applies, or the error of the selected implementation.
    pub(crate) fn eval_binary(&mut self,
                              left: &Node,
                              op: BinaryOperator,
                              right: &Node,
                              line: usize)
                              -> EvalResult<Value> {
        let left = self.eval_value(left)?;
        let right = self.eval_value(right)?;
        let name = op.function_name();

        let types = [left.type_of(), right.type_of()];
        let takes_object = matches!(op, BinaryOperator::Add | BinaryOperator::Mul);

        let entry = match self.registry.lookup(name, &types) {
            Some(entry) => entry,
            None if takes_object && types[0] == Type::String => {
                self.registry
                    .lookup(name, &[Type::String, Type::Object])
                    .map_or_else(|| self.registry.resolve(name, &types, line), Ok)?
            },
            None => self.registry.resolve(name, &types, line)?,
        };
        self.invoke(&entry, vec![left, right], line)
    }

    /// Evaluates a unary operation through the registry.
    pub(crate) fn eval_unary(&mut self,
                             op: UnaryOperator,
                             operand: &Node,
                             line: usize)
                             -> EvalResult<Value> {
        let value = self.eval_value(operand)?;
        let entry = self.registry.resolve(op.function_name(), &[value.type_of()], line)?;
        self.invoke(&entry, vec![value], line)
    }
}
