#[derive(Debug)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A specific token was expected but something else was found.
    ExpectedToken {
        /// Description of the expected token.
        expected: String,
        /// The token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The left side of an assignment is not a variable or member access.
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `const` declaration has no initializer.
    MissingInitializer {
        /// The name of the declared constant.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::ExpectedToken { expected, found, line } => write!(f,
                                                                    "Error on line {line}: Expected {expected} but found {found}."),

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::InvalidAssignmentTarget { line } => {
                write!(f, "Error on line {line}: Invalid assignment target.")
            },

            Self::MissingInitializer { name, line } => write!(f,
                                                              "Error on line {line}: Missing initializer in const declaration of '{name}'."),
        }
    }
}

impl std::error::Error for ParseError {}
