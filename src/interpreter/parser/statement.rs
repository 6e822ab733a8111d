use std::iter::Peekable;

use crate::{
    ast::{DeclKind, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            function::parse_function,
            utils::{expect_token, parse_identifier},
        },
    },
};

/// Parses a single statement.
/// A statement may be one of:
/// - a variable declaration (`let` or `const`),
/// - a function declaration,
/// - a `return` statement,
/// - an `if` statement,
/// - a `while` loop,
/// - a braced block,
/// - an expression used as a statement.
///
/// Parsing is attempted in that order; the first matching construct is
/// returned. If none match, the input is parsed as an expression statement.
/// A trailing semicolon, when present, is consumed; semicolons are never
/// required.
///
/// The statement's source line is taken from the next available token.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let statement = if let Some(statement) = parse_variable_declaration(tokens)? {
        statement
    } else if let Some(statement) = parse_function_declaration(tokens)? {
        statement
    } else if let Some(statement) = parse_return(tokens)? {
        statement
    } else if let Some(statement) = parse_if(tokens)? {
        statement
    } else if let Some(statement) = parse_while(tokens)? {
        statement
    } else if let Some(statement) = parse_block(tokens)? {
        statement
    } else {
        let current_line = tokens.peek().map_or(0, |(_, l)| *l);
        let expr = parse_expression(tokens)?;

        Statement::Expression { expr,
                                line: current_line }
    };

    if let Some((Token::Semicolon, _)) = tokens.peek() {
        tokens.next();
    }

    Ok(statement)
}

/// Parses a variable declaration statement.
///
/// A declaration has the form `let <identifier> (= <expression>)?` or
/// `const <identifier> = <expression>`. A `let` without an initializer
/// binds `undefined`; a `const` without one is a parse error.
///
/// If the next token is neither `let` nor `const`, this function returns
/// `Ok(None)` and does not consume any input.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a possible declaration.
///
/// # Returns
/// - `Ok(Some(Statement::VariableDeclaration))` if a declaration is parsed,
/// - `Ok(None)` if no declaration is present.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the identifier is missing,
/// - a `const` has no initializer,
/// - the initializer expression is malformed,
/// - input ends unexpectedly.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let kind = match tokens.peek() {
        Some((Token::Let, _)) => DeclKind::Let,
        Some((Token::Const, _)) => DeclKind::Const,
        _ => return Ok(None),
    };
    let line = tokens.next().map_or(0, |(_, l)| *l);

    let name = parse_identifier(tokens)?;

    let init = if let Some((Token::Equals, _)) = tokens.peek() {
        tokens.next();
        Some(parse_expression(tokens)?)
    } else {
        None
    };

    if kind == DeclKind::Const && init.is_none() {
        return Err(ParseError::MissingInitializer { name, line });
    }

    Ok(Some(Statement::VariableDeclaration { kind, name, init, line }))
}

/// Parses a function declaration.
///
/// In statement position `function` always begins a declaration, and a
/// declaration must carry a name; the expression form (nameless or not)
/// only appears inside expressions.
///
/// # Returns
/// - `Ok(Some(Statement::Function))` if a declaration is parsed,
/// - `Ok(None)` if the next token is not `function`.
///
/// # Errors
/// Returns a `ParseError` if the definition is malformed or nameless.
fn parse_function_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Function, line)) = tokens.peek() {
        let line = *line;
        let def = parse_function(tokens)?;

        if def.name.is_none() {
            return Err(ParseError::ExpectedToken { expected: "function name".to_string(),
                                                   found:    "'('".to_string(),
                                                   line, });
        }
        return Ok(Some(Statement::Function(def)));
    }

    Ok(None)
}

/// Parses a `return` statement.
///
/// The returned expression is optional: `return` directly followed by `;`,
/// `}` or the end of input yields `undefined`.
///
/// # Returns
/// - `Ok(Some(Statement::Return))` if a `return` is parsed,
/// - `Ok(None)` if the next token is not `return`.
fn parse_return<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Return, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let value = match tokens.peek() {
            Some((Token::Semicolon | Token::RBrace, _)) | None => None,
            _ => Some(parse_expression(tokens)?),
        };
        return Ok(Some(Statement::Return { value, line }));
    }

    Ok(None)
}

/// Parses an `if` statement with an optional `else` branch.
///
/// Syntax: `if "(" condition ")" statement ("else" statement)?`. Chained
/// `else if` falls out naturally, since `if` is itself a statement.
///
/// # Returns
/// - `Ok(Some(Statement::If))` if an `if` is parsed,
/// - `Ok(None)` if the next token is not `if`.
///
/// # Errors
/// Returns a `ParseError` when the parentheses are missing or a branch
/// fails to parse.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::If, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        expect_token(tokens, &Token::LParen, "'(' after 'if'")?;
        let condition = parse_expression(tokens)?;
        expect_token(tokens, &Token::RParen, "')' after condition")?;

        let then_branch = Box::new(parse_statement(tokens)?);

        let else_branch = if let Some((Token::Else, _)) = tokens.peek() {
            tokens.next();
            Some(Box::new(parse_statement(tokens)?))
        } else {
            None
        };

        return Ok(Some(Statement::If { condition,
                                       then_branch,
                                       else_branch,
                                       line }));
    }

    Ok(None)
}

/// Parses a `while` loop.
///
/// Syntax: `while "(" condition ")" statement`.
///
/// # Returns
/// - `Ok(Some(Statement::While))` if a loop is parsed,
/// - `Ok(None)` if the next token is not `while`.
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::While, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        expect_token(tokens, &Token::LParen, "'(' after 'while'")?;
        let condition = parse_expression(tokens)?;
        expect_token(tokens, &Token::RParen, "')' after condition")?;

        let body = Box::new(parse_statement(tokens)?);

        return Ok(Some(Statement::While { condition, body, line }));
    }

    Ok(None)
}

/// Parses a braced block statement.
///
/// In statement position `{` always opens a block, never an object
/// literal; object literals only appear in expression position.
///
/// # Returns
/// - `Ok(Some(Statement::Block))` if a block is parsed,
/// - `Ok(None)` if the next token is not `{`.
fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::LBrace, line)) = tokens.peek() {
        let line = *line;
        let statements = parse_brace_block(tokens)?;

        return Ok(Some(Statement::Block { statements, line }));
    }

    Ok(None)
}

/// Parses a `{ ... }` statement sequence and returns the statements.
///
/// Shared between block statements and function bodies. Stray semicolons
/// between statements are skipped.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening `{`.
///
/// # Errors
/// Returns a `ParseError` if either brace is missing or a contained
/// statement fails to parse.
pub(in crate::interpreter::parser) fn parse_brace_block<'a, I>(tokens: &mut Peekable<I>)
                                                               -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::LBrace, "'{'")?;

    let mut statements = Vec::new();
    loop {
        while let Some((Token::Semicolon, _)) = tokens.peek() {
            tokens.next();
        }
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }
    }

    Ok(statements)
}
