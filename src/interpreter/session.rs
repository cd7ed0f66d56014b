use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::core::Evaluator,
        lexer::Kind,
        output::OutputSink,
        parser::{ConsoleGrammar, console_parser},
        value::Value,
    },
    parser::Parser,
};

/// An interactive session: one parser and one evaluator.
///
/// Units are run one at a time. Variables and functions defined by a unit
/// stay defined for the following ones; the error log is cleared at the
/// start of every unit.
///
/// # Example
/// ```
/// use lexis::interpreter::{output::BufferedSink, session::Interpreter, value::Value};
///
/// let mut interpreter = Interpreter::new(BufferedSink::new());
/// interpreter.run("var x = 5").unwrap();
/// interpreter.run("x = x + 1; print x").unwrap();
///
/// assert_eq!(interpreter.output().lines, ["6"]);
/// assert_eq!(interpreter.run("typeof(x)").unwrap(), Some(Value::from("int")));
/// ```
pub struct Interpreter<O> {
    parser:    Parser<ConsoleGrammar, Kind>,
    evaluator: Evaluator<O>,
}

impl<O: OutputSink> Interpreter<O> {
    /// Creates a session writing to `output`.
    #[must_use]
    pub fn new(output: O) -> Self {
        Self { parser:    console_parser(),
               evaluator: Evaluator::new(output), }
    }

    /// Parses and evaluates one unit.
    ///
    /// # Returns
    /// The value of the last top-level statement that produced one. Runtime
    /// errors do not make this fail; they are collected in
    /// [`errors`](Self::errors).
    ///
    /// # Errors
    /// Returns the `ParseError` if the unit does not parse. Nothing is
    /// evaluated in that case.
    pub fn run(&mut self, source: &str) -> Result<Option<Value>, ParseError> {
        self.evaluator.clear_errors();

        let unit = self.parser.parse(source).inspect_err(|error| {
                                                 tracing::debug!(%error, "parse failed");
                                             })?;
        Ok(self.evaluator.eval_unit(&unit))
    }

    /// The runtime errors of the last unit.
    pub fn errors(&self) -> &[RuntimeError] {
        self.evaluator.errors()
    }

    /// Returns `true` if the last unit logged no runtime error.
    pub fn is_success(&self) -> bool {
        self.evaluator.errors().is_empty()
    }

    /// Hands the runtime errors of the last unit to the output sink.
    pub fn report_errors(&mut self) {
        self.evaluator.report_errors();
    }

    /// The output sink.
    pub const fn output(&self) -> &O {
        self.evaluator.output()
    }

    /// The output sink, mutably.
    pub const fn output_mut(&mut self) -> &mut O {
        self.evaluator.output_mut()
    }

    /// The evaluator, for inspecting the scope and the registry.
    pub const fn evaluator(&self) -> &Evaluator<O> {
        &self.evaluator
    }
}
