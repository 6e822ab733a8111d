//! # jslet
//!
//! jslet is a tree-walking interpreter for a small JavaScript subset,
//! written in Rust. It supports primitive values, arrays, objects,
//! function declarations, function expressions, arrow functions, lexical
//! closures, and a host-provided `print` builtin.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::core::Interpreter,
    host::{CaptureSink, OutputSink},
    lexer::tokenize,
    parser::core::parse_program,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The
/// AST is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches metadata (such as source locations) to AST nodes for error
///   reporting.
/// - Enables extensible and robust handling of parsed code.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while interpreting
/// code. It standardizes error reporting and carries detailed information
/// about failures, including error kinds, descriptions, and source
/// locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and
///   reporting utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, environments, host output, and all supporting
/// infrastructure to provide a complete runtime for source code
/// evaluation. It exposes the building blocks behind the crate-level entry
/// points.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use crate::error::Error;

/// Runs a source unit and returns everything it printed.
///
/// The source is lexed, parsed and executed against a fresh global
/// environment; each `print` invocation contributes one line to the
/// returned vector, in emission order.
///
/// # Errors
/// Returns an [`Error`] wrapping the lexing, parsing, or runtime failure
/// that stopped execution.
///
/// # Examples
/// ```
/// use jslet::evaluate;
///
/// let lines = evaluate("let x = 1 + \"2\"; print(x)").unwrap();
/// assert_eq!(lines, vec!["12".to_string()]);
///
/// // Reassigning a constant is a runtime error.
/// let result = evaluate("const a = 1; a = 2");
/// assert!(result.is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Vec<String>, Error> {
    let mut sink = CaptureSink::new();
    run(source, &mut sink)?;
    Ok(sink.into_lines())
}

/// Runs a source unit, sending `print` output to the given sink.
///
/// This is the embedding entry point: the CLI passes a stdout sink, tests
/// pass a capturing one, and other hosts can supply their own.
///
/// # Errors
/// Returns an [`Error`] wrapping the lexing, parsing, or runtime failure
/// that stopped execution.
pub fn run(source: &str, out: &mut dyn OutputSink) -> Result<(), Error> {
    let tokens = tokenize(source)?;
    let program = parse_program(&tokens)?;

    let mut interpreter = Interpreter::new(out);
    interpreter.run(&program)?;

    Ok(())
}
