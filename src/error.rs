/// Lexing errors.
///
/// Defines the error types that can occur while turning source text into
/// tokens: characters the language does not use, and string literals left
/// open at the end of a line or file.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur during parsing of the token
/// stream. Parse errors include unexpected tokens, missing delimiters,
/// invalid assignment targets, and any other issues detected before
/// evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors mirror the JavaScript error kinds the language reports: reference
/// errors for unresolved names and type errors for everything else.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Represents any error produced while interpreting a source unit.
///
/// Wraps the phase-specific error types so callers of the public API can
/// handle all failures through a single type.
pub enum Error {
    /// The lexer rejected the source text.
    Lex(LexError),
    /// The parser rejected the token stream.
    Parse(ParseError),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(error) => write!(f, "{error}"),
            Self::Parse(error) => write!(f, "{error}"),
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(error) => Some(error),
            Self::Parse(error) => Some(error),
            Self::Runtime(error) => Some(error),
        }
    }
}
