use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by array literals, object literals, parameter
/// lists and call argument lists. It repeatedly calls `parse_item` to parse
/// one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list, and a
/// comma directly followed by the closing token is a trailing comma, which
/// the language permits.
///
/// Grammar (simplified): `list := (item ("," item)* ","?)?`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g., `]` or `)`).
///
/// # Returns
/// A vector of parsed items. The closing token is consumed.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();

                // Trailing comma right before the closing token.
                if let Some((tok, _)) = tokens.peek()
                   && tok == closing
                {
                    tokens.next();
                    break;
                }
            },
            Some((tok, _)) if tok == closing => {
                tokens.next();
                break;
            },
            Some((tok, line)) => {
                return Err(ParseError::ExpectedToken { expected: format!("',' or {closing}"),
                                                       found:    tok.to_string(),
                                                       line:     *line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Identifier`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// A `String` containing the identifier.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(s), _)) => Ok(s.clone()),
        Some((tok, line)) => {
            Err(ParseError::ExpectedToken { expected: "identifier".to_string(),
                                            found:    tok.to_string(),
                                            line:     *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Consumes the next token, which must equal `expected`, and returns its
/// line.
///
/// # Errors
/// Returns a `ParseError` describing `expected` (via `description`) when a
/// different token or the end of input is found.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token,
                                                          description: &str)
                                                          -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, line)) if tok == expected => Ok(*line),
        Some((tok, line)) => {
            Err(ParseError::ExpectedToken { expected: description.to_string(),
                                            found:    tok.to_string(),
                                            line:     *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses one `key: value` entry of an object literal.
///
/// Keys may be bare identifiers or string literals in either quote style;
/// all three forms normalize to the same plain string key.
///
/// # Errors
/// Returns a `ParseError` if the key or the `:` is missing, or the value
/// expression fails to parse.
pub(in crate::interpreter::parser) fn parse_object_entry<'a, I>(tokens: &mut Peekable<I>)
                                                                -> ParseResult<(String, Expr)>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let key = match tokens.next() {
        Some((Token::Identifier(name), _)) => name.clone(),
        Some((Token::Str(s), _)) => s.clone(),
        Some((tok, line)) => {
            return Err(ParseError::ExpectedToken { expected: "object key".to_string(),
                                                   found:    tok.to_string(),
                                                   line:     *line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    expect_token(tokens, &Token::Colon, "':' after object key")?;
    let value = parse_expression(tokens)?;

    Ok((key, value))
}
