//! Expression evaluation over [`Value`]s.

use super::{BinOp, Expr, UnaryOp};
use crate::error::ResolveError;
use crate::traits::ValueLookup;
use crate::value::Value;

/// Parses `source`, applies the single-variable guard, then evaluates it.
///
/// ## Errors
/// - `ComplexExpression` (a skip) if the expression is not simple or does not
///   contain exactly one identifier occurrence
/// - `InvalidSyntax` if `source` does not parse
/// - anything raised by the lookup or by [`Value`] arithmetic
pub fn evaluate_guarded(source: &str, lookup: &impl ValueLookup) -> Result<Value, ResolveError> {
    let expr = Expr::parse(source).map_err(|e| ResolveError::InvalidSyntax {
        expression: source.to_string(),
        message: e.to_string(),
    })?;

    if !expr.is_simple() || expr.identifier_count() != 1 {
        return Err(ResolveError::ComplexExpression(source.to_string()));
    }

    evaluate(&expr, lookup)
}

/// Evaluates an expression tree without applying the guard.
///
/// Calls and non-arithmetic operators fail with `UnsupportedExpression`.
pub fn evaluate(expr: &Expr, lookup: &impl ValueLookup) -> Result<Value, ResolveError> {
    match expr {
        Expr::Number(value) => Ok(Value::from_scalar(*value)),

        Expr::Ident(name) => lookup.get_value(name),

        Expr::Unary { op, operand } => {
            let value = evaluate(operand, lookup)?;
            Ok(match op {
                UnaryOp::Neg => -value,
                UnaryOp::Plus => value,
            })
        }

        Expr::Binary { op, left, right } => {
            let left = evaluate(left, lookup)?;
            let right = evaluate(right, lookup)?;
            match op {
                BinOp::Add => Ok(left + right),
                BinOp::Sub => Ok(left - right),
                BinOp::Mul => left.try_mul(&right),
                BinOp::Div => left.try_div(&right),
                _ => Err(ResolveError::UnsupportedExpression(expr.describe())),
            }
        }

        Expr::Call { .. } => Err(ResolveError::UnsupportedExpression(expr.describe())),
    }
}
