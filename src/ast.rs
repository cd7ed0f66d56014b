/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw constants that can appear directly in source
/// code: `null`, numbers, booleans and strings.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// The `null` literal.
    Null,
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Float(f64),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A string literal.
    Str(String),
}

/// The type written in a variable declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredType {
    /// `var`: the type is taken from the initializer at runtime.
    Inferred,
    /// An explicit type name such as `int`. The name is resolved when the
    /// declaration is evaluated.
    Named(String),
}

/// A node of the abstract syntax tree.
///
/// Statements and expressions share one node type: every statement can be
/// evaluated for a value, and nodes carry no behavior of their own. Each
/// variant records the source line it starts on.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A literal value.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation.
    Unary {
        /// The operator.
        op:      UnaryOperator,
        /// The operand.
        operand: Box<Node>,
        /// Line number in the source code.
        line:    usize,
    },
    /// A binary operation such as `a + b`.
    Binary {
        /// Left-hand operand.
        left:  Box<Node>,
        /// The operator.
        op:    BinaryOperator,
        /// Right-hand operand.
        right: Box<Node>,
        /// Line number in the source code.
        line:  usize,
    },
    /// An assignment `target = value`.
    Assign {
        /// The node being assigned to; only variables are valid targets.
        target: Box<Node>,
        /// The assigned expression.
        value:  Box<Node>,
        /// Line number in the source code.
        line:   usize,
    },
    /// A declaration of one or more variables sharing a type and initializer.
    VariableDeclaration {
        /// The declared type, or `Inferred` for `var`.
        declared:    DeclaredType,
        /// The declared names, in source order.
        variables:   Vec<String>,
        /// The optional initializer, evaluated once for all names.
        initializer: Option<Box<Node>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A braced sequence of statements.
    Block {
        /// The statements, in source order.
        statements: Vec<Node>,
        /// Line number in the source code.
        line:       usize,
    },
    /// `if (condition) then else otherwise`.
    Branch {
        /// The condition; must evaluate to a bool.
        condition:   Box<Node>,
        /// Evaluated when the condition holds.
        then_branch: Box<Node>,
        /// Evaluated otherwise, if present.
        else_branch: Option<Box<Node>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `loop count body`.
    Loop {
        /// The iteration count; must evaluate to an int.
        count: Box<Node>,
        /// The repeated statement.
        body:  Box<Node>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `print expression`.
    Print {
        /// The printed expression.
        expr: Box<Node>,
        /// Line number in the source code.
        line: usize,
    },
    /// `typeof(expression)`.
    TypeOf {
        /// The inspected expression.
        expr: Box<Node>,
        /// Line number in the source code.
        line: usize,
    },
    /// `return expression`.
    Return {
        /// The returned expression.
        expr: Box<Node>,
        /// Line number in the source code.
        line: usize,
    },
    /// A user-defined function definition.
    FunctionDefinition(FunctionDef),
    /// A call of a function or operator overload by name.
    FunctionCall {
        /// The function name.
        name:      String,
        /// The argument expressions, evaluated left to right.
        arguments: Vec<Node>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A statement that does nothing.
    NoOp {
        /// Line number in the source code.
        line: usize,
    },
}

impl Node {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use lexis::ast::Node;
    ///
    /// let node = Node::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(node.line(), 5);
    /// ```
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::FunctionDefinition(def) => def.line,
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::Unary { line, .. }
            | Self::Binary { line, .. }
            | Self::Assign { line, .. }
            | Self::VariableDeclaration { line, .. }
            | Self::Block { line, .. }
            | Self::Branch { line, .. }
            | Self::Loop { line, .. }
            | Self::Print { line, .. }
            | Self::TypeOf { line, .. }
            | Self::Return { line, .. }
            | Self::FunctionCall { line, .. }
            | Self::NoOp { line } => *line,
        }
    }

    /// Returns `true` for [`Node::NoOp`].
    #[must_use]
    pub const fn is_no_op(&self) -> bool {
        matches!(self, Self::NoOp { .. })
    }
}

/// One declared parameter of a user function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// The parameter type name, e.g. `int`.
    pub type_name: String,
    /// The parameter name.
    pub name:      String,
}

/// Represents a user-defined function definition.
///
/// `func int add(int a, int b) { return a + b; }` defines `add` with two
/// `int` parameters and an `int` result.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:        String,
    /// The return type name, possibly `void`.
    pub return_type: String,
    /// The parameters in declaration order.
    pub params:      Vec<Parameter>,
    /// The body, always a [`Node::Block`].
    pub body:        Box<Node>,
    /// Line number in the source code.
    pub line:        usize,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// The registry name the operator dispatches to.
    #[must_use]
    pub const fn function_name(self) -> &'static str {
        match self {
            Self::Add => "op_Add",
            Self::Sub => "op_Subtract",
            Self::Mul => "op_Multiply",
            Self::Div => "op_Divide",
        }
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl UnaryOperator {
    /// The registry name the operator dispatches to.
    #[must_use]
    pub const fn function_name(self) -> &'static str {
        match self {
            Self::Negate => "op_Negate",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}
