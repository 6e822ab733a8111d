/// Binary operator parsing.
///
/// Implements the precedence chain for equality, relational, additive and
/// multiplicative operators.
pub mod binary;
/// Core parsing entry points.
///
/// Declares the `ParseResult` alias and the program- and expression-level
/// entry points the other submodules hang off of.
pub mod core;
/// Function parsing.
///
/// Handles `function` definitions (declarations and expressions) and arrow
/// functions, including the lookahead that tells an arrow parameter list
/// apart from a parenthesized expression.
pub mod function;
/// Statement parsing.
///
/// Declarations, `return`, `if`/`else`, `while`, blocks, and expression
/// statements.
pub mod statement;
/// Unary, postfix and primary expression parsing.
///
/// Prefix `-`/`!`, member access, calls, postfix `++`/`--`, and all literal
/// forms.
pub mod unary;
/// Small helpers shared across the parser.
pub mod utils;
