use crate::{
    ast::{Expr, UpdateOperator},
    error::RuntimeError,
    interpreter::{
        environment::EnvId,
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter<'_> {
    /// Reads a member from a container value.
    ///
    /// Objects are keyed by the canonical string form of `key`; a missing
    /// property yields `undefined`. Arrays accept numeric keys (whole,
    /// in-range indices) plus the `"length"` property; any other key
    /// yields `undefined`, matching out-of-range reads.
    ///
    /// # Errors
    /// [`RuntimeError::InvalidMemberAccess`] when `object` is not an array
    /// or object.
    pub(crate) fn get_member(&self, object: &Value, key: &Value, line: usize) -> EvalResult<Value> {
        match object {
            Value::Object(map) => {
                let key = key.to_string();
                Ok(map.borrow().get(&key).cloned().unwrap_or(Value::Undefined))
            },

            Value::Array(elements) => {
                if let Value::Str(key) = key
                   && key == "length"
                {
                    #[allow(clippy::cast_precision_loss)]
                    return Ok(Value::Number(elements.borrow().len() as f64));
                }
                if let Value::Number(n) = key
                   && let Some(index) = as_index(*n)
                {
                    return Ok(elements.borrow()
                                      .get(index)
                                      .cloned()
                                      .unwrap_or(Value::Undefined));
                }
                Ok(Value::Undefined)
            },

            other => {
                Err(RuntimeError::InvalidMemberAccess { found: other.type_name().to_string(),
                                                        line })
            },
        }
    }

    /// Writes a member of a container value.
    ///
    /// Object writes insert or update the property, preserving insertion
    /// order. Array writes require a whole, non-negative index; writing
    /// past the end grows the array, padding the gap with `undefined`.
    ///
    /// # Errors
    /// - [`RuntimeError::InvalidIndex`] for fractional or negative array
    ///   indices.
    /// - [`RuntimeError::InvalidMemberAccess`] when `object` is not an
    ///   array or object.
    pub(crate) fn set_member(&self,
                             object: &Value,
                             key: &Value,
                             value: Value,
                             line: usize)
                             -> EvalResult<()> {
        match object {
            Value::Object(map) => {
                map.borrow_mut().insert(key.to_string(), value);
                Ok(())
            },

            Value::Array(elements) => {
                let index = match key {
                    Value::Number(n) => as_index(*n),
                    _ => None,
                };
                let Some(index) = index else {
                    return Err(RuntimeError::InvalidIndex { details: key.to_string(),
                                                            line });
                };

                // Arrays are dense, so a write past the end allocates the
                // whole gap. Indices beyond this cap fail instead of
                // attempting a gigabyte-scale resize.
                if index > MAX_ARRAY_INDEX {
                    return Err(RuntimeError::InvalidIndex { details: key.to_string(),
                                                            line });
                }

                let mut elements = elements.borrow_mut();
                if index >= elements.len() {
                    elements.resize(index + 1, Value::Undefined);
                }
                elements[index] = value;
                Ok(())
            },

            other => {
                Err(RuntimeError::InvalidMemberAccess { found: other.type_name().to_string(),
                                                        line })
            },
        }
    }

    /// Stores `value` into an assignment target: a variable or a member
    /// access.
    ///
    /// Variable targets walk the scope chain and respect `const`; member
    /// targets evaluate the container and key first, then write through
    /// the shared handle so every alias observes the change.
    pub(crate) fn assign_target(&mut self,
                                target: &Expr,
                                value: Value,
                                env: EnvId,
                                line: usize)
                                -> EvalResult<()> {
        match target {
            Expr::Variable { name, .. } => self.envs.assign(env, name, value, line),

            Expr::Member { object, key, .. } => {
                let object = self.eval_expr(object, env)?;
                let key = self.eval_expr(key, env)?;
                self.set_member(&object, &key, value, line)
            },

            _ => unreachable!("assignment targets are validated by the parser"),
        }
    }

    /// Evaluates a postfix `++` or `--`.
    ///
    /// The target must currently hold a number; the expression yields the
    /// value from *before* the update. The target expression is evaluated
    /// exactly once, so a computed index like `a[i++]` runs its side
    /// effects a single time.
    ///
    /// # Errors
    /// [`RuntimeError::InvalidOperands`] when the target is not numeric,
    /// plus anything the read or write itself raises.
    pub(crate) fn eval_update(&mut self,
                              target: &Expr,
                              op: UpdateOperator,
                              env: EnvId,
                              line: usize)
                              -> EvalResult<Value> {
        match target {
            Expr::Variable { name, .. } => {
                let old =
                    self.envs
                        .lookup(env, name)
                        .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone(),
                                                                         line })?;
                let new = updated_number(&old, op, line)?;
                self.envs.assign(env, name, new.into(), line)?;
                Ok(old)
            },

            Expr::Member { object, key, .. } => {
                let object = self.eval_expr(object, env)?;
                let key = self.eval_expr(key, env)?;
                let old = self.get_member(&object, &key, line)?;
                let new = updated_number(&old, op, line)?;
                self.set_member(&object, &key, new.into(), line)?;
                Ok(old)
            },

            _ => unreachable!("update targets are validated by the parser"),
        }
    }
}

/// Largest index an array write may grow the array to. Arrays are stored
/// densely, so this bounds the memory a single write can claim.
const MAX_ARRAY_INDEX: usize = (1 << 24) - 1;

/// Applies `++` or `--` to a numeric value, rejecting everything else.
fn updated_number(old: &Value, op: UpdateOperator, line: usize) -> EvalResult<f64> {
    let Value::Number(n) = old else {
        return Err(RuntimeError::InvalidOperands { operator: op.to_string(),
                                                   details:  old.type_name().to_string(),
                                                   line });
    };

    Ok(match op {
        UpdateOperator::Increment => n + 1.0,
        UpdateOperator::Decrement => n - 1.0,
    })
}

/// Converts a numeric key to a usable array index.
///
/// Only finite, whole, non-negative numbers qualify.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn as_index(n: f64) -> Option<usize> {
    if n.is_finite() && n >= 0.0 && n.fract() == 0.0 {
        Some(n as usize)
    } else {
        None
    }
}
