#[derive(Debug)]
/// Represents all errors that can be raised during evaluation.
///
/// The `Display` output names the JavaScript error kind (`ReferenceError`
/// or `TypeError`) followed by the source line, matching what the language
/// reports to the user.
pub enum RuntimeError {
    /// Tried to read or assign a name with no binding in scope.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to call a value that is not a function.
    NotCallable {
        /// Description of the value's type.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Tried to reassign a `const` binding.
    ConstReassignment {
        /// The name of the constant.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator received operands it does not support.
    InvalidOperands {
        /// The operator as written in source.
        operator: String,
        /// Details about the operand types.
        details:  String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Member access on a value that has no members.
    InvalidMemberAccess {
        /// Description of the value's type.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An array was indexed with something other than a whole number.
    InvalidIndex {
        /// Description of the offending index.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "ReferenceError on line {line}: '{name}' is not defined.")
            },

            Self::NotCallable { found, line } => {
                write!(f, "TypeError on line {line}: {found} is not a function.")
            },

            Self::ConstReassignment { name, line } => write!(f,
                                                             "TypeError on line {line}: Assignment to constant variable '{name}'."),

            Self::InvalidOperands { operator, details, line } => write!(f,
                                                                        "TypeError on line {line}: Invalid operands to '{operator}': {details}."),

            Self::InvalidMemberAccess { found, line } => write!(f,
                                                                "TypeError on line {line}: Cannot read properties of {found}."),

            Self::InvalidIndex { details, line } => {
                write!(f, "TypeError on line {line}: Invalid array index: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
