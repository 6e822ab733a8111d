use std::rc::Rc;

use crate::{
    ast::{DeclKind, Expr, Statement},
    error::RuntimeError,
    interpreter::{
        environment::{BindingKind, EnvArena, EnvId},
        host::OutputSink,
        value::{Builtin, Closure, ObjectMap, Value},
    },
};

pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement finished executing.
///
/// `Return` carries a value upwards through nested blocks and loops until
/// the enclosing function call catches it; at the top level it is simply
/// ignored by `run`, since `return` outside a function has nothing to
/// unwind.
#[derive(Debug)]
pub enum Completion {
    /// The statement ran to completion; continue with the next one.
    Normal,
    /// A `return` statement executed with the given value.
    Return(Value),
}

/// Walks the AST and executes it.
///
/// The interpreter owns the environment arena for one run and borrows the
/// output sink that receives everything `print` emits. Independent source
/// units get independent interpreters; nothing is shared between runs.
pub struct Interpreter<'out> {
    pub(crate) envs: EnvArena,
    global:          EnvId,
    pub(crate) out:  &'out mut dyn OutputSink,
}

impl<'out> Interpreter<'out> {
    /// Creates an interpreter with a fresh global environment.
    ///
    /// The global environment starts with the host bindings: currently
    /// just `print`, bound as a constant.
    pub fn new(out: &'out mut dyn OutputSink) -> Self {
        let mut envs = EnvArena::new();
        let global = envs.push(None);
        envs.declare(global,
                     Builtin::Print.name(),
                     Value::Builtin(Builtin::Print),
                     BindingKind::Const);

        Self { envs, global, out }
    }

    /// Executes a parsed program against the global environment.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised; execution stops there.
    pub fn run(&mut self, statements: &[Statement]) -> EvalResult<()> {
        for statement in statements {
            self.exec_statement(statement, self.global)?;
        }
        Ok(())
    }

    /// Executes a single statement in the given environment.
    ///
    /// # Returns
    /// The statement's [`Completion`]: `Return` propagates out of blocks,
    /// branches and loops so the nearest function call can catch it.
    pub(crate) fn exec_statement(&mut self,
                                 statement: &Statement,
                                 env: EnvId)
                                 -> EvalResult<Completion> {
        match statement {
            Statement::VariableDeclaration { kind, name, init, .. } => {
                let value = match init {
                    Some(expr) => self.eval_expr(expr, env)?,
                    None => Value::Undefined,
                };
                let kind = match kind {
                    DeclKind::Let => BindingKind::Let,
                    DeclKind::Const => BindingKind::Const,
                };
                self.envs.declare(env, name, value, kind);
                Ok(Completion::Normal)
            },

            Statement::Function(def) => {
                let closure = Value::Closure(Rc::new(Closure { function: Rc::clone(def),
                                                               env }));
                let name = def.name.as_deref().unwrap_or_default();
                self.envs.declare(env, name, closure, BindingKind::Let);
                Ok(Completion::Normal)
            },

            Statement::Expression { expr, .. } => {
                self.eval_expr(expr, env)?;
                Ok(Completion::Normal)
            },

            Statement::Block { statements, .. } => {
                let scope = self.envs.push(Some(env));
                self.exec_statements(statements, scope)
            },

            Statement::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.eval_expr(expr, env)?,
                    None => Value::Undefined,
                };
                Ok(Completion::Return(value))
            },

            Statement::If { condition, then_branch, else_branch, .. } => {
                if self.eval_expr(condition, env)?.is_truthy() {
                    self.exec_statement(then_branch, env)
                } else if let Some(else_branch) = else_branch {
                    self.exec_statement(else_branch, env)
                } else {
                    Ok(Completion::Normal)
                }
            },

            Statement::While { condition, body, .. } => {
                while self.eval_expr(condition, env)?.is_truthy() {
                    if let Completion::Return(value) = self.exec_statement(body, env)? {
                        return Ok(Completion::Return(value));
                    }
                }
                Ok(Completion::Normal)
            },
        }
    }

    /// Executes a statement sequence, stopping early on `Return`.
    pub(crate) fn exec_statements(&mut self,
                                  statements: &[Statement],
                                  env: EnvId)
                                  -> EvalResult<Completion> {
        for statement in statements {
            if let Completion::Return(value) = self.exec_statement(statement, env)? {
                return Ok(Completion::Return(value));
            }
        }
        Ok(Completion::Normal)
    }

    /// Evaluates an expression to a value.
    ///
    /// # Errors
    /// - [`RuntimeError::UndefinedVariable`] for unresolved names.
    /// - Type errors from operators, member access and calls, raised by
    ///   the respective submodules.
    pub(crate) fn eval_expr(&mut self, expr: &Expr, env: EnvId) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(value.into()),

            Expr::Variable { name, line } => {
                self.envs.lookup(env, name).ok_or_else(|| {
                                               RuntimeError::UndefinedVariable { name: name.clone(),
                                                                                 line: *line }
                                           })
            },

            Expr::ArrayLiteral { elements, .. } => {
                let mut values = Vec::with_capacity(elements.len());
                for element in elements {
                    values.push(self.eval_expr(element, env)?);
                }
                Ok(values.into())
            },

            Expr::ObjectLiteral { entries, .. } => {
                let mut map = ObjectMap::new();
                for (key, value_expr) in entries {
                    let value = self.eval_expr(value_expr, env)?;
                    map.insert(key.clone(), value);
                }
                Ok(map.into())
            },

            Expr::Member { object, key, line } => {
                let object = self.eval_expr(object, env)?;
                let key = self.eval_expr(key, env)?;
                self.get_member(&object, &key, *line)
            },

            Expr::Call { callee, arguments, line } => {
                let callee = self.eval_expr(callee, env)?;
                let mut values = Vec::with_capacity(arguments.len());
                for argument in arguments {
                    values.push(self.eval_expr(argument, env)?);
                }
                self.call_value(callee, values, *line)
            },

            Expr::Function(def) => {
                Ok(Value::Closure(Rc::new(Closure { function: Rc::clone(def),
                                                    env })))
            },

            Expr::BinaryOp { left, op, right, line } => {
                let left = self.eval_expr(left, env)?;
                let right = self.eval_expr(right, env)?;
                Self::eval_binary_op(&left, *op, &right, *line)
            },

            Expr::UnaryOp { op, expr, line } => {
                let value = self.eval_expr(expr, env)?;
                Self::eval_unary_op(*op, &value, *line)
            },

            Expr::Update { target, op, line } => self.eval_update(target, *op, env, *line),

            Expr::Assignment { target, value, line } => {
                let value = self.eval_expr(value, env)?;
                self.assign_target(target, value.clone(), env, *line)?;
                Ok(value)
            },
        }
    }
}
