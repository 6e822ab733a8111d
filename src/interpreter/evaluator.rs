/// Binary and unary operator evaluation.
///
/// Implements arithmetic, string concatenation, comparisons, and the
/// prefix operators.
pub mod binary;
/// Call evaluation.
///
/// Invokes closures and builtins, binds parameters and `arguments`, and
/// runs function bodies.
pub mod call;
/// The evaluator core.
///
/// Declares the `Interpreter`, statement execution, and expression
/// dispatch.
pub mod core;
/// Member access evaluation.
///
/// Property and index reads and writes on objects and arrays, plus the
/// assignment-target and postfix-update plumbing built on them.
pub mod member;
