use crate::{error::RuntimeError, interpreter::value::Value};

/// What `print` shows for `null` or a missing value.
pub const NULL_MARKER: &str = "NULL";

/// The collaborator receiving everything a program prints and every error
/// the evaluator surfaces.
pub trait OutputSink {
    /// Receives the value of a `print` statement; `None` when the expression
    /// produced no value.
    fn print(&mut self, value: Option<&Value>);

    /// Receives one logged runtime error.
    fn report(&mut self, error: &RuntimeError);
}

/// Renders a printed value the way every sink shows it.
///
/// # Example
/// ```
/// use lexis::interpreter::{output::render, value::Value};
///
/// assert_eq!(render(Some(&Value::Integer(6))), "6");
/// assert_eq!(render(Some(&Value::Null)), "NULL");
/// assert_eq!(render(None), "NULL");
/// ```
#[must_use]
pub fn render(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => NULL_MARKER.to_string(),
        Some(value) => value.to_string(),
    }
}

/// Prints values to standard output and errors to standard error.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn print(&mut self, value: Option<&Value>) {
        println!("{}", render(value));
    }

    fn report(&mut self, error: &RuntimeError) {
        eprintln!("{error}");
    }
}

/// Collects output in memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BufferedSink {
    /// Printed lines, in order.
    pub lines:  Vec<String>,
    /// Reported error messages, in order.
    pub errors: Vec<String>,
}

impl BufferedSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputSink for BufferedSink {
    fn print(&mut self, value: Option<&Value>) {
        self.lines.push(render(value));
    }

    fn report(&mut self, error: &RuntimeError) {
        self.errors.push(error.to_string());
    }
}
