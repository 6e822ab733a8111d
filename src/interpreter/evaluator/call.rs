use crate::{
    ast::FunctionBody,
    error::RuntimeError,
    interpreter::{
        environment::BindingKind,
        evaluator::core::{Completion, EvalResult, Interpreter},
        value::{Builtin, Value},
    },
};

impl Interpreter<'_> {
    /// Invokes a callable value with already-evaluated arguments.
    ///
    /// Closures get a fresh frame whose parent is the closure's *defining*
    /// environment, never the call site; that frame binds the parameters
    /// (missing arguments become `undefined`, extras are still visible
    /// through `arguments`) and, for non-arrow functions, the `arguments`
    /// array itself. Arrow functions skip the `arguments` binding and thus
    /// see the nearest enclosing function's one through the scope chain.
    ///
    /// # Errors
    /// [`RuntimeError::NotCallable`] when `callee` is not a function,
    /// plus anything the body raises.
    pub(crate) fn call_value(&mut self,
                             callee: Value,
                             arguments: Vec<Value>,
                             line: usize)
                             -> EvalResult<Value> {
        match callee {
            Value::Builtin(Builtin::Print) => {
                let text = arguments.iter()
                                    .map(ToString::to_string)
                                    .collect::<Vec<_>>()
                                    .join(" ");
                self.out.write_line(&text);
                Ok(Value::Undefined)
            },

            Value::Closure(closure) => {
                let function = &closure.function;
                let frame = self.envs.push(Some(closure.env));

                if !function.is_arrow {
                    self.envs.declare(frame,
                                      "arguments",
                                      arguments.clone().into(),
                                      BindingKind::Let);
                }
                for (index, param) in function.params.iter().enumerate() {
                    let value = arguments.get(index).cloned().unwrap_or(Value::Undefined);
                    self.envs.declare(frame, param, value, BindingKind::Let);
                }

                match &function.body {
                    FunctionBody::Expression(expr) => self.eval_expr(expr, frame),
                    FunctionBody::Block(statements) => {
                        match self.exec_statements(statements, frame)? {
                            Completion::Return(value) => Ok(value),
                            Completion::Normal => Ok(Value::Undefined),
                        }
                    },
                }
            },

            other => {
                Err(RuntimeError::NotCallable { found: other.type_name().to_string(),
                                                line })
            },
        }
    }
}
