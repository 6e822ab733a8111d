use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{Expr, FunctionBody, FunctionExpr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            statement::parse_brace_block,
            utils::{expect_token, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a `function` definition, used both for declarations and for
/// function expressions.
///
/// Syntax: `function [name] "(" params ")" "{" body "}"`. The name is
/// optional here; the statement parser rejects nameless declarations.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `function` keyword.
///
/// # Returns
/// The shared function definition node.
///
/// # Errors
/// Returns a `ParseError` if the parameter list or body is malformed, or
/// input ends unexpectedly.
pub fn parse_function<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Rc<FunctionExpr>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::Function, "'function'")?;

    let name = if let Some((Token::Identifier(name), _)) = tokens.peek() {
        let name = name.clone();
        tokens.next();
        Some(name)
    } else {
        None
    };

    expect_token(tokens, &Token::LParen, "'(' after function name")?;
    let params = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;

    let statements = parse_brace_block(tokens)?;

    Ok(Rc::new(FunctionExpr { name,
                              params,
                              body: FunctionBody::Block(statements),
                              is_arrow: false,
                              line }))
}

/// Decides whether the upcoming tokens form an arrow function parameter
/// list.
///
/// Looks for `"(" (ident ("," ident)* ","?)? ")" "=>"` using a cloned
/// iterator, so nothing is consumed. Only identifiers and commas may
/// appear between the parentheses; anything else means the `(` opens a
/// parenthesized expression instead.
///
/// # Parameters
/// - `tokens`: Token stream positioned at a `(` token.
///
/// # Returns
/// `true` when an arrow function starts here.
pub fn is_arrow_ahead<'a, I>(tokens: &Peekable<I>) -> bool
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();

    match lookahead.next() {
        Some((Token::LParen, _)) => {},
        _ => return false,
    }
    loop {
        match lookahead.next() {
            Some((Token::RParen, _)) => break,
            Some((Token::Identifier(_) | Token::Comma, _)) => {},
            _ => return false,
        }
    }

    matches!(lookahead.peek(), Some((Token::FatArrow, _)))
}

/// Parses an arrow function.
///
/// Two parameter forms are accepted:
/// - `( a, b )` — a parenthesized, possibly empty list,
/// - `a` — a single bare identifier.
///
/// The body after `=>` is either a braced statement block or a single
/// expression that becomes the implicit return value.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `(` or the bare parameter.
///
/// # Returns
/// An `Expr::Function` node with `is_arrow` set.
///
/// # Errors
/// Returns a `ParseError` if the parameter list, `=>`, or the body is
/// malformed.
pub fn parse_arrow_function<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let params = match tokens.peek() {
        Some((Token::LParen, _)) => {
            tokens.next();
            parse_comma_separated(tokens, parse_identifier, &Token::RParen)?
        },
        Some((Token::Identifier(_), _)) => vec![parse_identifier(tokens)?],
        Some((tok, line)) => {
            return Err(ParseError::ExpectedToken { expected: "arrow function parameters"
                                                       .to_string(),
                                                   found:    tok.to_string(),
                                                   line:     *line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    let line = expect_token(tokens, &Token::FatArrow, "'=>'")?;

    let body = if let Some((Token::LBrace, _)) = tokens.peek() {
        FunctionBody::Block(parse_brace_block(tokens)?)
    } else {
        FunctionBody::Expression(Box::new(parse_expression(tokens)?))
    };

    Ok(Expr::Function(Rc::new(FunctionExpr { name: None,
                                             params,
                                             body,
                                             is_arrow: true,
                                             line })))
}
