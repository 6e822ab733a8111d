use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator, UpdateOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            function::{is_arrow_ahead, parse_arrow_function, parse_function},
            utils::{expect_token, parse_comma_separated, parse_identifier, parse_object_entry},
        },
    },
};

/// Parses prefix unary expressions.
///
/// Handles `-` (arithmetic negation) and `!` (logical NOT), which may be
/// stacked: `!!x`, `--x` is two negations (the language has no prefix
/// increment).
///
/// Grammar: `unary := ("-" | "!") unary | postfix`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// The parsed expression node.
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((token, line)) = tokens.peek() {
        let op = match token {
            Token::Minus => Some(UnaryOperator::Negate),
            Token::Bang => Some(UnaryOperator::Not),
            _ => None,
        };
        if let Some(op) = op {
            let line = *line;
            tokens.next();

            let expr = parse_unary(tokens)?;
            return Ok(Expr::UnaryOp { op,
                                      expr: Box::new(expr),
                                      line });
        }
    }

    parse_postfix(tokens)
}

/// Parses postfix expressions.
///
/// A primary expression may be followed by any number of postfix forms,
/// applied left to right:
///
/// - `.key` — member access with a bare identifier key,
/// - `[expr]` — member access with a computed key,
/// - `(args)` — a call,
/// - `++` / `--` — a postfix update.
///
/// Dot access desugars to the same `Expr::Member` node as the bracket
/// form, with the identifier turned into a string-literal key.
///
/// Grammar: `postfix := primary ("." ident | "[" expression "]" | "(" args ")" | "++" | "--")*`
///
/// # Errors
/// - [`ParseError::InvalidAssignmentTarget`] when `++`/`--` follows
///   something that is not a variable or member access.
/// - Propagates errors from sub-expression parsing.
pub fn parse_postfix<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut expr = parse_primary(tokens)?;

    loop {
        match tokens.peek() {
            Some((Token::Dot, line)) => {
                let line = *line;
                tokens.next();

                let name = parse_identifier(tokens)?;
                let key = Expr::Literal { value: LiteralValue::Str(name),
                                          line };
                expr = Expr::Member { object: Box::new(expr),
                                      key: Box::new(key),
                                      line };
            },
            Some((Token::LBracket, line)) => {
                let line = *line;
                tokens.next();

                let key = parse_expression(tokens)?;
                expect_token(tokens, &Token::RBracket, "']' after index expression")?;
                expr = Expr::Member { object: Box::new(expr),
                                      key: Box::new(key),
                                      line };
            },
            Some((Token::LParen, line)) => {
                let line = *line;
                tokens.next();

                let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
                expr = Expr::Call { callee: Box::new(expr),
                                    arguments,
                                    line };
            },
            Some((token @ (Token::PlusPlus | Token::MinusMinus), line)) => {
                let op = if matches!(token, Token::PlusPlus) {
                    UpdateOperator::Increment
                } else {
                    UpdateOperator::Decrement
                };
                let line = *line;
                tokens.next();

                if !matches!(expr, Expr::Variable { .. } | Expr::Member { .. }) {
                    return Err(ParseError::InvalidAssignmentTarget { line });
                }
                expr = Expr::Update { target: Box::new(expr),
                                      op,
                                      line };
            },
            _ => break,
        }
    }

    Ok(expr)
}

/// Parses a primary expression.
///
/// Primary forms:
/// - literals: numbers, strings, booleans, `undefined`,
/// - identifiers,
/// - array literals `[...]` and object literals `{...}`,
/// - `function` expressions,
/// - arrow functions (`(a, b) => ...` or `a => ...`),
/// - parenthesized expressions.
///
/// Arrow functions and parenthesized expressions both start with `(`; a
/// cloned-iterator lookahead over the parameter list decides which one
/// applies without consuming input.
///
/// # Errors
/// - `UnexpectedToken` for a token that cannot start an expression.
/// - `UnexpectedEndOfInput` if the stream is exhausted.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Number(n), line)) => {
            let expr = Expr::Literal { value: (*n).into(),
                                       line:  *line, };
            tokens.next();
            Ok(expr)
        },
        Some((Token::Str(s), line)) => {
            let expr = Expr::Literal { value: s.clone().into(),
                                       line:  *line, };
            tokens.next();
            Ok(expr)
        },
        Some((Token::Bool(b), line)) => {
            let expr = Expr::Literal { value: (*b).into(),
                                       line:  *line, };
            tokens.next();
            Ok(expr)
        },
        Some((Token::Undefined, line)) => {
            let expr = Expr::Literal { value: LiteralValue::Undefined,
                                       line:  *line, };
            tokens.next();
            Ok(expr)
        },
        Some((Token::Identifier(_), _)) => {
            // A lone identifier directly before `=>` is a one-parameter
            // arrow function without parentheses.
            let mut lookahead = tokens.clone();
            lookahead.next();
            if let Some((Token::FatArrow, _)) = lookahead.peek() {
                return parse_arrow_function(tokens);
            }

            let (name, line) = match tokens.next() {
                Some((Token::Identifier(name), line)) => (name.clone(), *line),
                _ => unreachable!(),
            };
            Ok(Expr::Variable { name, line })
        },
        Some((Token::LBracket, line)) => {
            let line = *line;
            tokens.next();

            let elements = parse_comma_separated(tokens, parse_expression, &Token::RBracket)?;
            Ok(Expr::ArrayLiteral { elements, line })
        },
        Some((Token::LBrace, line)) => {
            let line = *line;
            tokens.next();

            let entries = parse_comma_separated(tokens, parse_object_entry, &Token::RBrace)?;
            Ok(Expr::ObjectLiteral { entries, line })
        },
        Some((Token::Function, _)) => Ok(Expr::Function(parse_function(tokens)?)),
        Some((Token::LParen, _)) => {
            if is_arrow_ahead(tokens) {
                return parse_arrow_function(tokens);
            }
            tokens.next();

            let expr = parse_expression(tokens)?;
            expect_token(tokens, &Token::RParen, "')' after expression")?;
            Ok(expr)
        },
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
