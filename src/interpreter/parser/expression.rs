use crate::{
    ast::{BinaryOperator, LiteralValue, Node, UnaryOperator},
    interpreter::{
        lexer::Kind,
        parser::{
            core::Instance,
            utils::{parse_comma_separated, parse_identifier},
        },
    },
    lexer::Literal,
    parser::ParseResult,
};

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar:
/// ```text
///     expression     := additive
///     additive       := multiplicative (("+" | "-") multiplicative)*
///     multiplicative := unary (("*" | "/") unary)*
///     unary          := "-" unary | call
///     call           := identifier "(" arguments ")" | factor
/// ```
pub(crate) fn parse_expression(parser: &mut Instance<'_>) -> ParseResult<Node> {
    parser.nested(parse_additive)
}

/// Folds a left-associative chain of binary operators.
///
/// `operator` maps the current token to the operator it spells, if any;
/// `operand` parses the next higher precedence level. Every fold deepens the
/// tree by one, so it counts as a nesting level until the chain ends.
fn parse_binary_chain(parser: &mut Instance<'_>,
                      operator: fn(Kind) -> Option<BinaryOperator>,
                      operand: fn(&mut Instance<'_>) -> ParseResult<Node>)
                      -> ParseResult<Node> {
    let mut left = operand(parser)?;

    let mut folds = 0;
    while let Some(op) = operator(parser.current().kind) {
        let line = parser.line();
        parser.enter()?;
        folds += 1;
        parser.advance()?;
        let right = operand(parser)?;
        left = Node::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              line };
    }
    parser.leave(folds);

    Ok(left)
}

fn parse_additive(parser: &mut Instance<'_>) -> ParseResult<Node> {
    parse_binary_chain(parser,
                       |kind| match kind {
                           Kind::Plus => Some(BinaryOperator::Add),
                           Kind::Minus => Some(BinaryOperator::Sub),
                           _ => None,
                       },
                       parse_multiplicative)
}

fn parse_multiplicative(parser: &mut Instance<'_>) -> ParseResult<Node> {
    parse_binary_chain(parser,
                       |kind| match kind {
                           Kind::Multiply => Some(BinaryOperator::Mul),
                           Kind::Divide => Some(BinaryOperator::Div),
                           _ => None,
                       },
                       parse_unary)
}

fn parse_unary(parser: &mut Instance<'_>) -> ParseResult<Node> {
    if !parser.at(Kind::Minus) {
        return parse_call_or_factor(parser);
    }

    let line = parser.line();
    parser.advance()?;
    let operand = parser.nested(parse_unary)?;
    Ok(Node::Unary { op: UnaryOperator::Negate,
                     operand: Box::new(operand),
                     line })
}

/// Recognizes a call by looking one token past an identifier, so that `f(x)`
/// is never read as the variable `f` followed by `(x)`.
fn parse_call_or_factor(parser: &mut Instance<'_>) -> ParseResult<Node> {
    if parser.at(Kind::Identifier) && parser.peek()?.kind == Kind::LParen {
        let line = parser.line();
        let name = parse_identifier(parser)?;
        return parse_call(parser, name, line);
    }
    parse_factor(parser)
}

/// Parses the argument list of a call, the name having been consumed.
///
/// Grammar: `arguments := (expression ("," expression)*)?`
pub(crate) fn parse_call(parser: &mut Instance<'_>, name: String, line: usize) -> ParseResult<Node> {
    parser.consume(Kind::LParen)?;
    let arguments = parse_comma_separated(parser, parse_expression, Kind::RParen)?;
    Ok(Node::FunctionCall { name,
                            arguments,
                            line })
}

/// Parses a factor: a literal, a variable or a parenthesized expression.
///
/// # Errors
/// `UnexpectedToken` for any other token.
fn parse_factor(parser: &mut Instance<'_>) -> ParseResult<Node> {
    let line = parser.line();
    let value = match parser.current().kind {
        Kind::Null => LiteralValue::Null,
        Kind::True => LiteralValue::Bool(true),
        Kind::False => LiteralValue::Bool(false),
        Kind::Integer | Kind::Float | Kind::String => match &parser.current().value {
            Some(Literal::Int(n)) => LiteralValue::Integer(*n),
            Some(Literal::Float(x)) => LiteralValue::Float(*x),
            Some(Literal::Bool(b)) => LiteralValue::Bool(*b),
            Some(Literal::Str(s)) => LiteralValue::Str(s.clone()),
            None => return Err(parser.unexpected()),
        },
        Kind::LParen => {
            parser.advance()?;
            let expr = parse_expression(parser)?;
            parser.consume(Kind::RParen)?;
            return Ok(expr);
        },
        Kind::Identifier => {
            let name = parse_identifier(parser)?;
            return Ok(Node::Variable { name, line });
        },
        _ => return Err(parser.unexpected()),
    };

    parser.advance()?;
    Ok(Node::Literal { value, line })
}

