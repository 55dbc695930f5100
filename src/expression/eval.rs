use crate::data::value::{Record, Value};
use crate::expression::ast::{BinaryOp, Expr, UnaryOp};
use crate::foundation::error::{ChartError, ChartResult};
use std::cmp::Ordering;

/// Evaluate an expression against one record.
///
/// Unknown fields read as [`Value::Empty`]; arithmetic and ordering over an empty operand yield
/// empty. Division by zero and arithmetic over text or booleans fail.
pub(crate) fn eval_expr(expr: &Expr, record: &Record) -> ChartResult<Value> {
    match expr {
        Expr::Literal(v) => Ok(v.clone()),
        Expr::Field(name) => Ok(record.get(name).cloned().unwrap_or_default()),
        Expr::Unary(op, inner) => {
            let v = eval_expr(inner, record)?;
            match (op, v) {
                (_, Value::Empty) => Ok(Value::Empty),
                (UnaryOp::Neg, Value::Number(n)) => Ok(Value::Number(-n)),
                (UnaryOp::Neg, other) => Err(ChartError::evaluation(format!(
                    "cannot negate non-numeric value '{other}'"
                ))),
                (UnaryOp::Not, other) => Ok(Value::Bool(!other.is_truthy())),
            }
        }
        Expr::Binary(op, left, right) => match op {
            BinaryOp::And => {
                let l = eval_expr(left, record)?;
                if !l.is_truthy() {
                    return Ok(Value::Bool(false));
                }
                Ok(Value::Bool(eval_expr(right, record)?.is_truthy()))
            }
            BinaryOp::Or => {
                let l = eval_expr(left, record)?;
                if l.is_truthy() {
                    return Ok(Value::Bool(true));
                }
                Ok(Value::Bool(eval_expr(right, record)?.is_truthy()))
            }
            _ => {
                let l = eval_expr(left, record)?;
                let r = eval_expr(right, record)?;
                eval_binary(*op, l, r)
            }
        },
    }
}

fn eval_binary(op: BinaryOp, l: Value, r: Value) -> ChartResult<Value> {
    match op {
        BinaryOp::Eq => return Ok(Value::Bool(l == r)),
        BinaryOp::Ne => return Ok(Value::Bool(l != r)),
        _ => {}
    }

    if l.is_empty() || r.is_empty() {
        return Ok(Value::Empty);
    }

    match op {
        BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge => {
            let ord = compare(&l, &r).ok_or_else(|| {
                ChartError::evaluation(format!(
                    "cannot compare '{l}' {op} '{r}'"
                ))
            })?;
            let b = match op {
                BinaryOp::Lt => ord == Ordering::Less,
                BinaryOp::Le => ord != Ordering::Greater,
                BinaryOp::Gt => ord == Ordering::Greater,
                _ => ord != Ordering::Less,
            };
            Ok(Value::Bool(b))
        }
        _ => {
            let (Value::Number(a), Value::Number(b)) = (&l, &r) else {
                return Err(ChartError::evaluation(format!(
                    "arithmetic '{op}' requires numbers, got '{l}' and '{r}'"
                )));
            };
            let (a, b) = (*a, *b);
            let v = match op {
                BinaryOp::Add => a + b,
                BinaryOp::Sub => a - b,
                BinaryOp::Mul => a * b,
                BinaryOp::Div | BinaryOp::Rem if b == 0.0 => {
                    return Err(ChartError::evaluation("division by zero"));
                }
                BinaryOp::Div => a / b,
                _ => a % b,
            };
            if !v.is_finite() {
                return Err(ChartError::evaluation(format!(
                    "non-finite result from '{a}' {op} '{b}'"
                )));
            }
            Ok(Value::Number(v))
        }
    }
}

fn compare(l: &Value, r: &Value) -> Option<Ordering> {
    match (l, r) {
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expression/eval.rs"]
mod tests;
