use crate::{
    ast::Node,
    interpreter::{
        lexer::{Kind, lexer_config},
        parser::statement::parse_statement,
    },
    parser::{Grammar, ParseResult, Parser, ParserInstance},
};

/// The parser cursor over the console language.
pub type Instance<'c> = ParserInstance<'c, Kind>;

/// The grammar of the console language.
///
/// A unit is a sequence of statements followed by the end of input, and
/// parses to a [`Node::Block`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleGrammar;

impl Grammar<Kind> for ConsoleGrammar {
    type Output = Node;

    fn parse(&self, parser: &mut Instance<'_>) -> ParseResult<Node> {
        let line = parser.line();
        let statements = parse_statements(parser, Kind::End)?;
        parser.consume(Kind::End)?;
        Ok(Node::Block { statements, line })
    }
}

/// Creates a parser for the console language.
///
/// # Example
/// ```
/// use lexis::{ast::Node, interpreter::parser::console_parser};
///
/// let parser = console_parser();
/// let Node::Block { statements, .. } = parser.parse("var x = 1; print x").unwrap() else {
///     panic!("a unit parses to a block");
/// };
/// assert_eq!(statements.len(), 2);
///
/// assert!(parser.parse("print 1 2").is_err());
/// ```
#[must_use]
pub fn console_parser() -> Parser<ConsoleGrammar, Kind> {
    Parser::new(ConsoleGrammar, lexer_config())
}

/// Parses statements until `terminator`, which is left for the caller to
/// consume.
///
/// Statements are separated by `;`, and runs of `;` are skipped. A statement
/// ending in `}` may be followed directly by the next one. Anything else
/// after a statement is an error, so trailing tokens are never dropped.
///
/// Grammar:
/// ```text
///     statements := ";"* (statement (";"+ | <after "}">) )* <terminator>
/// ```
///
/// # Errors
/// `UnexpectedToken` for a token that neither separates nor terminates, or
/// any error of a statement.
pub(crate) fn parse_statements(parser: &mut Instance<'_>, terminator: Kind) -> ParseResult<Vec<Node>> {
    let mut statements = Vec::new();
    loop {
        while parser.at(Kind::Semicolon) {
            parser.advance()?;
        }
        if parser.at(terminator) {
            return Ok(statements);
        }

        let statement = parse_statement(parser)?;
        let after_block = parser.previous() == Some(Kind::RBrace) && !statement.is_no_op();
        statements.push(statement);

        if !(parser.at(Kind::Semicolon) || parser.at(terminator) || after_block) {
            return Err(parser.unexpected());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::{BinaryOperator, DeclaredType, LiteralValue},
        error::ParseError,
    };

    fn parse(source: &str) -> ParseResult<Vec<Node>> {
        match console_parser().parse(source)? {
            Node::Block { statements, .. } => Ok(statements),
            other => panic!("unexpected root {other:?}"),
        }
    }

    fn int(value: i64) -> Box<Node> {
        Box::new(Node::Literal { value: LiteralValue::Integer(value),
                                 line:  1, })
    }

    #[test]
    fn multiplication_binds_tighter() {
        let statements = parse("1+2*3").unwrap();
        let expected = Node::Binary { left:  int(1),
                                      op:    BinaryOperator::Add,
                                      right: Box::new(Node::Binary { left:  int(2),
                                                                     op:    BinaryOperator::Mul,
                                                                     right: int(3),
                                                                     line:  1, }),
                                      line:  1, };
        assert_eq!(statements, [expected]);
    }

    #[test]
    fn chains_fold_left() {
        let statements = parse("8 - 4 - 2").unwrap();
        let Node::Binary { left, right, .. } = &statements[0] else { panic!("binary expected") };
        assert!(matches!(**left, Node::Binary { op: BinaryOperator::Sub, .. }));
        assert_eq!(*right, int(2));
    }

    #[test]
    fn identifier_led_statements() {
        let statements = parse("int x = 1; x = 2; f(x); x").unwrap();
        assert!(matches!(&statements[0],
                         Node::VariableDeclaration { declared: DeclaredType::Named(t), .. } if t == "int"));
        assert!(matches!(statements[1], Node::Assign { .. }));
        assert!(matches!(&statements[2], Node::FunctionCall { name, .. } if name == "f"));
        assert!(matches!(statements[3], Node::NoOp { .. }));
    }

    #[test]
    fn declarations_list_names() {
        let statements = parse("var a, b = 1").unwrap();
        let Node::VariableDeclaration { declared,
                                        variables,
                                        initializer,
                                        .. } = &statements[0]
        else {
            panic!("declaration expected")
        };
        assert_eq!(*declared, DeclaredType::Inferred);
        assert_eq!(variables, &["a", "b"]);
        assert!(initializer.is_some());
    }

    #[test]
    fn inferred_declaration_needs_initializer() {
        assert!(matches!(parse("var y;"), Err(ParseError::MissingInitializer { .. })));
    }

    #[test]
    fn blocks_separate_statements() {
        let statements = parse("func int add(int a, int b) { return a + b; } print add(2, 3)").unwrap();
        assert_eq!(statements.len(), 2);
        let Node::FunctionDefinition(def) = &statements[0] else { panic!("definition expected") };
        assert_eq!(def.params.len(), 2);
        assert_eq!(def.return_type, "int");
    }

    #[test]
    fn implicit_return_body() {
        let statements = parse("func int twice(int n) n * 2").unwrap();
        let Node::FunctionDefinition(def) = &statements[0] else { panic!("definition expected") };
        let Node::Block { statements, .. } = &*def.body else { panic!("block expected") };
        assert!(matches!(statements[0], Node::Return { .. }));
    }

    #[test]
    fn else_if_chains() {
        let statements = parse("if (a) print 1 else if (b) print 2 else { print 3 }").unwrap();
        let Node::Branch { else_branch: Some(otherwise), .. } = &statements[0] else {
            panic!("branch expected")
        };
        assert!(matches!(**otherwise, Node::Branch { else_branch: Some(_), .. }));
    }

    #[test]
    fn calls_inside_expressions() {
        let statements = parse("print f(1) + g()").unwrap();
        let Node::Print { expr, .. } = &statements[0] else { panic!("print expected") };
        let Node::Binary { left, right, .. } = &**expr else { panic!("binary expected") };
        assert!(matches!(**left, Node::FunctionCall { .. }));
        assert!(matches!(&**right, Node::FunctionCall { arguments, .. } if arguments.is_empty()));
    }

    #[test]
    fn unary_minus() {
        let statements = parse("loop -1 print 2 * -3").unwrap();
        let Node::Loop { count, .. } = &statements[0] else { panic!("loop expected") };
        assert!(matches!(**count, Node::Unary { .. }));
    }

    #[test]
    fn trailing_tokens_are_fatal() {
        assert!(matches!(parse("print 1 2"), Err(ParseError::UnexpectedToken { .. })));
        assert!(matches!(parse("x = 1 )"), Err(ParseError::UnexpectedToken { .. })));
        assert!(matches!(parse("{ print 1 } )"), Err(ParseError::UnexpectedToken { .. })));
        assert!(parse("print (1").is_err());
        assert!(parse("print").is_err());
    }

    #[test]
    fn empty_statements_are_skipped() {
        assert!(parse(";; ;").unwrap().is_empty());
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn lines_are_recorded() {
        let statements = parse("print 1;\n\nprint 2").unwrap();
        assert_eq!(statements[1].line(), 3);
    }
}
