use crate::{
    ast::{DeclaredType, FunctionDef, Node, Parameter},
    error::ParseError,
    interpreter::{
        lexer::Kind,
        parser::{
            core::{Instance, parse_statements},
            expression::{parse_call, parse_expression},
            utils::{parse_comma_separated, parse_identifier},
        },
    },
    parser::ParseResult,
};

/// Parses one statement.
///
/// The first token selects the rule. A statement that starts with a literal,
/// `(` or `-` is an expression. Any other token yields a [`Node::NoOp`]
/// without being consumed; the statement sequence then decides whether the
/// token may follow.
///
/// Grammar:
/// ```text
///     statement := block | "var" declaration | identifier_led | function
///                | "typeof" "(" expression ")" | "return" expression
///                | "if" branch | "loop" expression statement
///                | "print" expression | expression | <nothing>
/// ```
pub(crate) fn parse_statement(parser: &mut Instance<'_>) -> ParseResult<Node> {
    parser.nested(statement)
}

fn statement(parser: &mut Instance<'_>) -> ParseResult<Node> {
    let line = parser.line();
    match parser.current().kind {
        Kind::LBrace => parse_block(parser),
        Kind::Var => {
            parser.advance()?;
            parse_declaration(parser, DeclaredType::Inferred, line)
        },
        Kind::Identifier => parse_identifier_led(parser),
        Kind::Func => parse_function_definition(parser),
        Kind::TypeOf => {
            parser.advance()?;
            parser.consume(Kind::LParen)?;
            let expr = parse_expression(parser)?;
            parser.consume(Kind::RParen)?;
            Ok(Node::TypeOf { expr: Box::new(expr),
                              line })
        },
        Kind::Return => {
            parser.advance()?;
            let expr = parse_expression(parser)?;
            Ok(Node::Return { expr: Box::new(expr),
                              line })
        },
        Kind::If => {
            parser.advance()?;
            parse_branch(parser, line)
        },
        Kind::Loop => {
            parser.advance()?;
            let count = parse_expression(parser)?;
            let body = parse_statement(parser)?;
            Ok(Node::Loop { count: Box::new(count),
                            body: Box::new(body),
                            line })
        },
        Kind::Print => {
            parser.advance()?;
            let expr = parse_expression(parser)?;
            Ok(Node::Print { expr: Box::new(expr),
                             line })
        },
        Kind::Null
        | Kind::Integer
        | Kind::Float
        | Kind::String
        | Kind::True
        | Kind::False
        | Kind::LParen
        | Kind::Minus => parse_expression(parser),
        _ => Ok(Node::NoOp { line }),
    }
}

/// Parses a braced block.
///
/// Grammar: `block := "{" statements "}"`
pub(crate) fn parse_block(parser: &mut Instance<'_>) -> ParseResult<Node> {
    let line = parser.line();
    parser.consume(Kind::LBrace)?;
    let statements = parse_statements(parser, Kind::RBrace)?;
    parser.consume(Kind::RBrace)?;
    Ok(Node::Block { statements, line })
}

/// Parses a statement that starts with an identifier.
///
/// The token after the identifier decides:
/// - `(`: a function call, `name(args)`.
/// - `=`: an assignment to the variable `name`.
/// - another identifier: a declaration whose type is `name`.
/// - anything else: a no-op.
fn parse_identifier_led(parser: &mut Instance<'_>) -> ParseResult<Node> {
    let line = parser.line();
    let name = parse_identifier(parser)?;

    match parser.current().kind {
        Kind::LParen => parse_call(parser, name, line),
        Kind::Assign => {
            parser.advance()?;
            let value = parse_expression(parser)?;
            Ok(Node::Assign { target: Box::new(Node::Variable { name, line }),
                              value: Box::new(value),
                              line })
        },
        Kind::Identifier => parse_declaration(parser, DeclaredType::Named(name), line),
        _ => Ok(Node::NoOp { line }),
    }
}

/// Parses the names and optional initializer of a declaration, the type
/// having been consumed.
///
/// Grammar: `declaration := identifier ("," identifier)* ("=" expression)?`
///
/// # Errors
/// `MissingInitializer` if the type is inferred and no initializer follows.
fn parse_declaration(parser: &mut Instance<'_>,
                     declared: DeclaredType,
                     line: usize)
                     -> ParseResult<Node> {
    let mut variables = vec![parse_identifier(parser)?];
    while parser.at(Kind::Comma) {
        parser.advance()?;
        variables.push(parse_identifier(parser)?);
    }

    let initializer = if parser.at(Kind::Assign) {
        parser.advance()?;
        Some(Box::new(parse_expression(parser)?))
    } else if declared == DeclaredType::Inferred {
        return Err(ParseError::MissingInitializer { names: variables.join(", "),
                                                    line });
    } else {
        None
    };

    Ok(Node::VariableDeclaration { declared,
                                   variables,
                                   initializer,
                                   line })
}

/// Parses a function definition.
///
/// The body is a block, or a single statement wrapped in one. For a
/// non-`void` function whose body is not a block and does not start with
/// `return`, the body is an expression that is returned.
///
/// Grammar:
/// ```text
///     function  := "func" identifier identifier "(" (parameter ("," parameter)*)? ")" body
///     parameter := identifier identifier
///     body      := block | expression | statement
/// ```
fn parse_function_definition(parser: &mut Instance<'_>) -> ParseResult<Node> {
    let line = parser.line();
    parser.consume(Kind::Func)?;
    let return_type = parse_identifier(parser)?;
    let name = parse_identifier(parser)?;

    parser.consume(Kind::LParen)?;
    let params = parse_comma_separated(parser, parse_parameter, Kind::RParen)?;

    let body = if parser.at(Kind::LBrace) {
        parse_block(parser)?
    } else {
        let body_line = parser.line();
        let statement = if return_type != "void" && !parser.at(Kind::Return) {
            let expr = parse_expression(parser)?;
            Node::Return { expr: Box::new(expr),
                           line: body_line }
        } else {
            parse_statement(parser)?
        };
        Node::Block { statements: vec![statement],
                      line:       body_line, }
    };

    Ok(Node::FunctionDefinition(FunctionDef { name,
                                              return_type,
                                              params,
                                              body: Box::new(body),
                                              line }))
}

fn parse_parameter(parser: &mut Instance<'_>) -> ParseResult<Parameter> {
    let type_name = parse_identifier(parser)?;
    let name = parse_identifier(parser)?;
    Ok(Parameter { type_name, name })
}

/// Parses an `if` statement with optional `else` and chained `else if`, the
/// `if` keyword having been consumed.
///
/// Syntax:
/// ```text
///     if (<condition>) <statement>
///     else if (<condition>) <statement>
///     else <statement>
/// ```
/// Nested `else if` constructs are parsed recursively.
fn parse_branch(parser: &mut Instance<'_>, line: usize) -> ParseResult<Node> {
    parser.consume(Kind::LParen)?;
    let condition = parse_expression(parser)?;
    parser.consume(Kind::RParen)?;

    let then_branch = parse_statement(parser)?;

    let else_branch = if parser.at(Kind::Else) {
        parser.advance()?;
        if parser.at(Kind::If) {
            let else_line = parser.line();
            parser.advance()?;
            Some(Box::new(parser.nested(|parser| parse_branch(parser, else_line))?))
        } else {
            Some(Box::new(parse_statement(parser)?))
        }
    } else {
        None
    };

    Ok(Node::Branch { condition: Box::new(condition),
                      then_branch: Box::new(then_branch),
                      else_branch,
                      line })
}
