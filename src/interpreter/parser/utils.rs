use crate::{
    error::ParseError,
    interpreter::{lexer::Kind, parser::core::Instance},
    parser::ParseResult,
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by parameter lists and call arguments. It
/// repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse or a token other than a
/// comma or the closing token follows an item.
pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
    parser: &mut Instance<'_>,
    parse_item: impl Fn(&mut Instance<'_>) -> ParseResult<T>,
    closing: Kind)
    -> ParseResult<Vec<T>> {
    let mut items = Vec::new();
    if parser.at(closing) {
        parser.advance()?;
        return Ok(items);
    }

    loop {
        items.push(parse_item(parser)?);
        match parser.current().kind {
            Kind::Comma => {
                parser.advance()?;
            },
            kind if kind == closing => {
                parser.advance()?;
                return Ok(items);
            },
            _ => return Err(parser.unexpected()),
        }
    }
}

/// Parses a plain identifier and returns its name.
///
/// The current token must be `Kind::Identifier`. Keywords are separate
/// token kinds and never reach this function.
///
/// # Errors
/// `TokenMismatch` if the current token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier(parser: &mut Instance<'_>) -> ParseResult<String> {
    let token = parser.consume(Kind::Identifier)?;
    token.text()
         .map(str::to_string)
         .ok_or_else(|| ParseError::UnexpectedToken { found: token.to_string(),
                                                      line:  token.line, })
}
