use crate::{
    ast::{BinaryOperator, UnaryOperator},
    error::RuntimeError,
    interpreter::{evaluator::core::{EvalResult, Interpreter}, value::Value},
};

impl Interpreter<'_> {
    /// Applies a binary operator to two evaluated operands.
    ///
    /// Semantics:
    /// - `+` concatenates when either operand is a string, stringifying
    ///   the other side canonically; otherwise it adds numbers.
    /// - `-`, `*`, `/`, `%` require numbers. Division follows IEEE 754,
    ///   so dividing by zero yields an infinity, not an error.
    /// - `==` and `!=` are strict: no coercion, containers compare by
    ///   identity.
    /// - The orderings compare two numbers or two strings
    ///   (lexicographically).
    ///
    /// # Errors
    /// [`RuntimeError::InvalidOperands`] when the operand types do not fit
    /// the operator.
    pub(crate) fn eval_binary_op(left: &Value,
                                 op: BinaryOperator,
                                 right: &Value,
                                 line: usize)
                                 -> EvalResult<Value> {
        match op {
            BinaryOperator::Add => match (left, right) {
                (Value::Str(a), b) => Ok(format!("{a}{b}").into()),
                (a, Value::Str(b)) => Ok(format!("{a}{b}").into()),
                (Value::Number(a), Value::Number(b)) => Ok((a + b).into()),
                _ => Err(invalid_operands(left, op, right, line)),
            },

            BinaryOperator::Sub => numeric_op(left, op, right, line, |a, b| a - b),
            BinaryOperator::Mul => numeric_op(left, op, right, line, |a, b| a * b),
            BinaryOperator::Div => numeric_op(left, op, right, line, |a, b| a / b),
            BinaryOperator::Mod => numeric_op(left, op, right, line, |a, b| a % b),

            BinaryOperator::Equal => Ok((left == right).into()),
            BinaryOperator::NotEqual => Ok((left != right).into()),

            BinaryOperator::Less
            | BinaryOperator::Greater
            | BinaryOperator::LessEqual
            | BinaryOperator::GreaterEqual => comparison_op(left, op, right, line),
        }
    }

    /// Applies a prefix unary operator.
    ///
    /// `-` negates a number; `!` inverts truthiness and accepts any value.
    ///
    /// # Errors
    /// [`RuntimeError::InvalidOperands`] when `-` is applied to a
    /// non-number.
    pub(crate) fn eval_unary_op(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => match value {
                Value::Number(n) => Ok((-n).into()),
                other => {
                    Err(RuntimeError::InvalidOperands { operator: op.to_string(),
                                                        details:  other.type_name().to_string(),
                                                        line })
                },
            },
            UnaryOperator::Not => Ok((!value.is_truthy()).into()),
        }
    }
}

/// Applies a numeric binary operation, rejecting non-number operands.
fn numeric_op(left: &Value,
              op: BinaryOperator,
              right: &Value,
              line: usize,
              apply: impl Fn(f64, f64) -> f64)
              -> EvalResult<Value> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(apply(*a, *b).into()),
        _ => Err(invalid_operands(left, op, right, line)),
    }
}

/// Applies an ordering comparison to two numbers or two strings.
fn comparison_op(left: &Value,
                 op: BinaryOperator,
                 right: &Value,
                 line: usize)
                 -> EvalResult<Value> {
    let ordering = match (left, right) {
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        _ => return Err(invalid_operands(left, op, right, line)),
    };

    // NaN comparisons are all false in the language.
    let Some(ordering) = ordering else {
        return Ok(false.into());
    };

    let result = match op {
        BinaryOperator::Less => ordering.is_lt(),
        BinaryOperator::Greater => ordering.is_gt(),
        BinaryOperator::LessEqual => ordering.is_le(),
        BinaryOperator::GreaterEqual => ordering.is_ge(),
        _ => unreachable!("comparison_op is only called for ordering operators"),
    };
    Ok(result.into())
}

/// Builds the `InvalidOperands` error for a failed binary operation.
fn invalid_operands(left: &Value, op: BinaryOperator, right: &Value, line: usize) -> RuntimeError {
    RuntimeError::InvalidOperands { operator: op.to_string(),
                                    details:  format!("{} and {}",
                                                      left.type_name(),
                                                      right.type_name()),
                                    line }
}
