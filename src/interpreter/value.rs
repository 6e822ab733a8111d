use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::{FunctionExpr, LiteralValue},
    interpreter::environment::EnvId,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, function returns, and conditions. Primitives are stored
/// inline; arrays and objects are shared behind `Rc<RefCell<..>>` so that
/// every binding holding the same container observes the same mutations.
#[derive(Debug, Clone)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A string value.
    Str(String),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// The `undefined` value. Produced by missing properties, out-of-range
    /// array reads, functions without an explicit `return`, and `let`
    /// declarations without an initializer.
    Undefined,
    /// An array of values. Reference semantics: cloning the `Value` clones
    /// the handle, not the elements.
    Array(Rc<RefCell<Vec<Self>>>),
    /// An object: an insertion-ordered string-keyed map. Reference
    /// semantics, like arrays.
    Object(Rc<RefCell<ObjectMap>>),
    /// A closure: a function definition paired with the environment it was
    /// created in.
    Closure(Rc<Closure>),
    /// A host-provided builtin function.
    Builtin(Builtin),
}

/// A string-keyed map that remembers insertion order.
///
/// Property reads and writes are linear scans; object literals in scripts
/// are small enough that ordering guarantees matter more than lookup speed.
#[derive(Debug, Default)]
pub struct ObjectMap {
    entries: Vec<(String, Value)>,
}

impl ObjectMap {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Looks up the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Stores `value` under `key`.
    ///
    /// An existing entry is updated in place, keeping its original position;
    /// a new key is appended at the end. This is what preserves insertion
    /// order across re-assignments.
    pub fn insert(&mut self, key: String, value: Value) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(String, Value)> {
        self.entries.iter()
    }
}

/// A function value: the shared definition plus the environment that was
/// active where the definition was evaluated.
///
/// The environment reference is what makes lexical capture work; calls
/// create their frame as a child of `env`, not of the call site.
#[derive(Debug)]
pub struct Closure {
    /// The function definition, shared with the AST.
    pub function: Rc<FunctionExpr>,
    /// The defining environment.
    pub env:      EnvId,
}

/// Host functions pre-bound in the global environment.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Builtin {
    /// `print(...)`: stringifies its arguments, joins them with single
    /// spaces, and writes one line to the output sink.
    Print,
}

impl Builtin {
    /// The name the builtin is bound to in the global environment.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Print => "print",
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(RefCell::new(v)))
    }
}

impl From<ObjectMap> for Value {
    fn from(v: ObjectMap) -> Self {
        Self::Object(Rc::new(RefCell::new(v)))
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Number(n) => (*n).into(),
            LiteralValue::Str(s) => s.clone().into(),
            LiteralValue::Bool(b) => (*b).into(),
            LiteralValue::Undefined => Self::Undefined,
        }
    }
}

impl Value {
    /// Applies the language's truthiness rules.
    ///
    /// `undefined`, `false`, `0`, `NaN` and the empty string are falsy;
    /// everything else, including empty arrays and objects, is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Str(s) => !s.is_empty(),
            Self::Array(_) | Self::Object(_) | Self::Closure(_) | Self::Builtin(_) => true,
        }
    }

    /// A short description of the value's type for error messages, e.g.
    /// `"a number"` or `"undefined"`.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "a number",
            Self::Str(_) => "a string",
            Self::Bool(_) => "a boolean",
            Self::Undefined => "undefined",
            Self::Array(_) => "an array",
            Self::Object(_) => "an object",
            Self::Closure(_) | Self::Builtin(_) => "a function",
        }
    }

    /// Returns `true` if the value is [`Closure`] or [`Builtin`].
    #[must_use]
    pub const fn is_callable(&self) -> bool {
        matches!(self, Self::Closure(..) | Self::Builtin(..))
    }
}

/// Strict equality between values.
///
/// Primitives compare by value; arrays, objects and closures compare by
/// identity, so two structurally equal literals are *not* equal but two
/// handles to the same container are.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Undefined, Self::Undefined) => true,
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b),
            (Self::Object(a), Self::Object(b)) => Rc::ptr_eq(a, b),
            (Self::Closure(a), Self::Closure(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => a == b,
            _ => false,
        }
    }
}

/// Formats a number the way the language prints it: integral values
/// without a decimal point, non-finite values as `Infinity`, `-Infinity`
/// or `NaN`.
fn format_number(f: &mut std::fmt::Formatter<'_>, n: f64) -> std::fmt::Result {
    if n.is_nan() {
        write!(f, "NaN")
    } else if n.is_infinite() {
        write!(f, "{}", if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        // Covers negative zero, which prints without the sign.
        write!(f, "0")
    } else {
        write!(f, "{n}")
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_with(f, &mut Vec::new())
    }
}

impl Value {
    /// Formats the value, replacing containers already being formatted
    /// further up the stack with `[Circular]`.
    ///
    /// Containers alias by reference, so a value may contain itself;
    /// `visited` holds the `Rc` pointers of every array and object
    /// currently open on the formatting stack.
    fn fmt_with(&self,
                f: &mut std::fmt::Formatter<'_>,
                visited: &mut Vec<*const ()>)
                -> std::fmt::Result {
        match self {
            Self::Number(n) => format_number(f, *n),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Undefined => write!(f, "undefined"),
            Self::Array(a) => {
                let ptr = Rc::as_ptr(a).cast::<()>();
                if visited.contains(&ptr) {
                    return write!(f, "[Circular]");
                }
                visited.push(ptr);

                write!(f, "[")?;

                for (index, value) in a.borrow().iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    value.fmt_with(f, visited)?;
                }

                write!(f, "]")?;
                visited.pop();
                Ok(())
            },
            Self::Object(o) => {
                let ptr = Rc::as_ptr(o).cast::<()>();
                if visited.contains(&ptr) {
                    return write!(f, "[Circular]");
                }
                visited.push(ptr);

                write!(f, "{{")?;

                for (index, (key, value)) in o.borrow().iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{key}: ")?;
                    value.fmt_with(f, visited)?;
                }

                write!(f, "}}")?;
                visited.pop();
                Ok(())
            },
            Self::Closure(c) => match &c.function.name {
                Some(name) => write!(f, "[Function: {name}]"),
                None => write!(f, "[Function]"),
            },
            Self::Builtin(b) => write!(f, "[Function: {}]", b.name()),
        }
    }
}
