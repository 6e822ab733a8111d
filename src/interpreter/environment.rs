use std::collections::HashMap;

use crate::{error::RuntimeError, interpreter::value::Value};

/// Identifies an [`Environment`] inside an [`EnvArena`].
///
/// Closures store an `EnvId` instead of a reference-counted pointer, which
/// keeps closure/environment cycles from leaking: the arena owns every
/// environment and frees them all when the interpreter is dropped.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EnvId(usize);

/// The kind of a runtime binding, mirroring the declaration keyword.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BindingKind {
    /// Created by `let`, function parameters, and `arguments`.
    Let,
    /// Created by `const` and builtin registration. Reassignment fails.
    Const,
}

/// A single name binding: the current value plus its mutability.
#[derive(Debug)]
struct Binding {
    value: Value,
    kind:  BindingKind,
}

/// One scope's worth of bindings plus a link to the enclosing scope.
#[derive(Debug)]
struct Environment {
    bindings: HashMap<String, Binding>,
    parent:   Option<EnvId>,
}

/// Owns every environment created during a run.
///
/// Environments form a tree through their parent links: the global
/// environment is the root, blocks and call frames are children of the
/// scope they appear in (for calls, the closure's defining environment).
/// Lookups and assignments walk the parent chain from innermost to
/// outermost.
#[derive(Debug, Default)]
pub struct EnvArena {
    environments: Vec<Environment>,
}

impl EnvArena {
    /// Creates an empty arena.
    #[must_use]
    pub const fn new() -> Self {
        Self { environments: Vec::new() }
    }

    /// Creates a new environment whose parent is `parent` (or none, for the
    /// global environment) and returns its id.
    pub fn push(&mut self, parent: Option<EnvId>) -> EnvId {
        let id = EnvId(self.environments.len());
        self.environments.push(Environment { bindings: HashMap::new(),
                                             parent });
        id
    }

    /// Creates a binding in `env` itself, shadowing any binding of the same
    /// name in enclosing scopes.
    pub fn declare(&mut self, env: EnvId, name: &str, value: Value, kind: BindingKind) {
        self.environments[env.0].bindings
                                .insert(name.to_string(), Binding { value, kind });
    }

    /// Resolves `name` by walking the scope chain from `env` outwards.
    ///
    /// Returns a clone of the bound value; containers are `Rc`-backed, so
    /// the clone aliases the same storage.
    #[must_use]
    pub fn lookup(&self, env: EnvId, name: &str) -> Option<Value> {
        let mut current = Some(env);

        while let Some(id) = current {
            let environment = &self.environments[id.0];

            if let Some(binding) = environment.bindings.get(name) {
                return Some(binding.value.clone());
            }
            current = environment.parent;
        }

        None
    }

    /// Reassigns the nearest binding of `name`, walking the scope chain
    /// from `env` outwards.
    ///
    /// # Errors
    /// - [`RuntimeError::ConstReassignment`] if the nearest binding was
    ///   declared with `const`.
    /// - [`RuntimeError::UndefinedVariable`] if no scope binds `name`.
    pub fn assign(&mut self,
                  env: EnvId,
                  name: &str,
                  value: Value,
                  line: usize)
                  -> Result<(), RuntimeError> {
        let mut current = Some(env);

        while let Some(id) = current {
            let environment = &mut self.environments[id.0];

            if let Some(binding) = environment.bindings.get_mut(name) {
                if binding.kind == BindingKind::Const {
                    return Err(RuntimeError::ConstReassignment { name: name.to_string(),
                                                                 line });
                }
                binding.value = value;
                return Ok(());
            }
            current = environment.parent;
        }

        Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                              line })
    }
}
