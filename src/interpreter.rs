/// The environment module manages runtime scopes.
///
/// Environments hold name bindings and form a chain from the innermost
/// scope out to the global one. They live in an arena owned by the
/// interpreter, so closures can reference their defining scope by id
/// without creating reference cycles.
///
/// # Responsibilities
/// - Declares, resolves and reassigns bindings along the scope chain.
/// - Enforces `const` at assignment time.
/// - Owns all environments for the lifetime of a run.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs operations, manages variable state, and routes `print` output
/// to the host. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, closures, member access and control flow.
/// - Reports runtime errors such as undefined variables or invalid
///   operations.
pub mod evaluator;
/// The host module connects the interpreter to the outside world.
///
/// Scripts never write to stdout themselves; the `print` builtin hands
/// each formatted line to an `OutputSink` chosen by the embedder.
///
/// # Responsibilities
/// - Defines the `OutputSink` trait.
/// - Provides the stdout sink used by the CLI and the capturing sink used
///   by the library API and tests.
pub mod host;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream
/// of tokens, each corresponding to meaningful language elements such as
/// numbers, strings, identifiers, operators, delimiters, and keywords.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type and source
///   location.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of
/// expressions and statements. This enables later phases to analyze and
/// execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with location
///   info.
/// - Supports literals, member access, function calls, assignments, and
///   more.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during interpretation,
/// such as numbers, strings, booleans, `undefined`, arrays, objects, and
/// function values. It also provides truthiness, strict equality, and the
/// canonical stringification `print` relies on.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements equality, truthiness and display formatting.
/// - Provides the insertion-ordered object map.
pub mod value;
