use std::rc::Rc;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers all raw, constant values that can appear directly in
/// source code: numbers, strings, booleans, and `undefined`. It is used in
/// the AST to represent literal expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A numeric literal. All numbers are double-precision floats.
    Number(f64),
    /// A string literal, produced by either quote style.
    Str(String),
    /// A boolean literal: `true` or `false`.
    Bool(bool),
    /// The `undefined` literal.
    Undefined,
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers all types of expressions, from literals and variables to
/// member access, calls, function expressions, and assignments. Each variant
/// models a distinct syntactic construct and carries its source line for
/// error reporting. Nodes are immutable after parsing; a function body is
/// evaluated on every call without being re-parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, boolean, `undefined`).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// An array literal, e.g. `[1, "two", true]`.
    ArrayLiteral {
        /// Element expressions, in source order.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// An object literal, e.g. `{a: 1, "b": 2}`.
    ///
    /// Keys originate from bare identifiers or single-/double-quoted
    /// strings; all three forms are normalized to plain string keys by the
    /// parser. Entry order is source order and is preserved at runtime.
    ObjectLiteral {
        /// The `(key, value-expression)` pairs, in source order.
        entries: Vec<(String, Self)>,
        /// Line number in the source code.
        line:    usize,
    },
    /// Member access, e.g. `obj.key`, `obj["key"]` or `arr[0]`.
    ///
    /// Dot access is desugared to a string-literal key, so both syntactic
    /// forms produce the same node.
    Member {
        /// The expression producing the container.
        object: Box<Self>,
        /// The expression producing the key or index.
        key:    Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
    /// A call expression, e.g. `f(1, 2)`.
    Call {
        /// The expression producing the callee.
        callee:    Box<Self>,
        /// Argument expressions, in source order.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A function expression or arrow function.
    ///
    /// The definition is shared behind `Rc` so every closure created from
    /// this node references the same body without cloning it.
    Function(Rc<FunctionExpr>),
    /// A binary operation, e.g. `a + b`.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A unary operation, e.g. `-x` or `!flag`.
    UnaryOp {
        /// The operator.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A postfix update, e.g. `counter++`.
    ///
    /// Evaluates to the value the target held *before* the update.
    Update {
        /// The target, a `Variable` or `Member` expression.
        target: Box<Self>,
        /// Increment or decrement.
        op:     UpdateOperator,
        /// Line number in the source code.
        line:   usize,
    },
    /// An assignment, e.g. `x = 1` or `obj.key = 2`.
    Assignment {
        /// The target, a `Variable` or `Member` expression.
        target: Box<Self>,
        /// The value being assigned.
        value:  Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use jslet::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::ArrayLiteral { line, .. }
            | Self::ObjectLiteral { line, .. }
            | Self::Member { line, .. }
            | Self::Call { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::Update { line, .. }
            | Self::Assignment { line, .. } => *line,
            Self::Function(def) => def.line,
        }
    }
}

/// Represents a function definition: a declaration, a function expression,
/// or an arrow function.
///
/// The same node backs all three syntactic forms; the evaluator pairs it
/// with the environment active at the point of evaluation to form a closure.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionExpr {
    /// The function name, if any. Declarations always carry one; function
    /// expressions may; arrow functions never do.
    pub name:     Option<String>,
    /// Parameter names, in declaration order.
    pub params:   Vec<String>,
    /// The function body.
    pub body:     FunctionBody,
    /// Whether this is an arrow function. Arrow functions do not receive
    /// their own `arguments` binding.
    pub is_arrow: bool,
    /// Line number in the source code.
    pub line:     usize,
}

/// The body of a function.
#[derive(Debug, Clone, PartialEq)]
pub enum FunctionBody {
    /// A braced sequence of statements. Yields `undefined` unless a
    /// `return` statement runs.
    Block(Vec<Statement>),
    /// A concise arrow body: a single expression whose value is implicitly
    /// returned.
    Expression(Box<Expr>),
}

/// An AST node representing a top-level or nested statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable declaration using `let` or `const`.
    VariableDeclaration {
        /// Whether the binding is reassignable.
        kind: DeclKind,
        /// The name being bound.
        name: String,
        /// The initializer, if present. A `let` without one binds
        /// `undefined`; `const` requires one.
        init: Option<Expr>,
        /// Line number in the source code.
        line: usize,
    },
    /// A function declaration, binding a closure to its name in the
    /// enclosing scope at the point of declaration.
    Function(Rc<FunctionExpr>),
    /// A standalone expression evaluated for its side effects.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A braced block introducing a new scope.
    Block {
        /// Statements inside the block.
        statements: Vec<Statement>,
        /// Line number in the source code.
        line:       usize,
    },
    /// A `return` statement. Only meaningful inside a function body.
    Return {
        /// The returned expression, or `undefined` if absent.
        value: Option<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
    /// An `if` statement with an optional `else` branch.
    If {
        /// The condition expression.
        condition:   Expr,
        /// Statement executed when the condition is truthy.
        then_branch: Box<Statement>,
        /// Statement executed otherwise, if present.
        else_branch: Option<Box<Statement>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A `while` loop.
    While {
        /// The condition, re-evaluated before each iteration.
        condition: Expr,
        /// The loop body.
        body:      Box<Statement>,
        /// Line number in the source code.
        line:      usize,
    },
}

/// The kind of a variable declaration.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DeclKind {
    /// A reassignable binding.
    Let,
    /// A binding frozen after initialization.
    Const,
}

impl std::fmt::Display for DeclKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Let => write!(f, "let"),
            Self::Const => write!(f, "const"),
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition, or string concatenation when either operand is a string
    /// (`+`).
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-`)
    Negate,
    /// Logical NOT (`!`)
    Not,
}

/// Represents a postfix update operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UpdateOperator {
    /// Increment (`++`)
    Increment,
    /// Decrement (`--`)
    Decrement,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}

impl std::fmt::Display for UpdateOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Increment => write!(f, "++"),
            Self::Decrement => write!(f, "--"),
        }
    }
}
