use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_equality, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program: a sequence of statements up to the end of input.
///
/// Stray semicolons between statements are skipped; the fixture corpus
/// mixes semicolon styles freely.
///
/// # Parameters
/// - `tokens`: The token/line pairs produced by the lexer.
///
/// # Returns
/// The parsed statements, in source order.
///
/// # Errors
/// Returns the first [`ParseError`] encountered; there is no recovery.
///
/// # Example
/// ```
/// use jslet::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let tokens = tokenize("let x = 1; print(x)").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.len(), 2);
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Vec<Statement>> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    while iter.peek().is_some() {
        while let Some((Token::Semicolon, _)) = iter.peek() {
            iter.next();
        }
        if iter.peek().is_none() {
            break;
        }
        statements.push(parse_statement(&mut iter)?);
    }

    Ok(statements)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, assignment, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := assignment`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_assignment(tokens)
}

/// Parses an assignment expression.
///
/// Assignment is right-associative: `a = b = 1` assigns `1` to both names.
/// The left-hand side must be a variable or member access; anything else
/// is rejected once the `=` is seen.
///
/// Grammar: `assignment := equality ("=" assignment)?`
///
/// # Errors
/// - [`ParseError::InvalidAssignmentTarget`] when the left side is not
///   assignable.
/// - Propagates any errors from sub-expression parsing.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_equality(tokens)?;

    if let Some((Token::Equals, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let value = parse_assignment(tokens)?;

        return match expr {
            Expr::Variable { .. } | Expr::Member { .. } => {
                Ok(Expr::Assignment { target: Box::new(expr),
                                      value: Box::new(value),
                                      line })
            },
            _ => Err(ParseError::InvalidAssignmentTarget { line }),
        };
    }

    Ok(expr)
}
