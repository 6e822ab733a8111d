#[derive(Debug)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// Encountered a character the language does not use.
    UnexpectedCharacter {
        /// The offending slice of source text.
        slice: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A string literal was opened but never closed.
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { slice, line } => {
                write!(f, "Error on line {line}: Unexpected character: {slice}.")
            },
            Self::UnterminatedString { line } => {
                write!(f, "Error on line {line}: Unterminated string literal.")
            },
        }
    }
}

impl std::error::Error for LexError {}
