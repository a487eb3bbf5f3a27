use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, evaluate, unsupported},
        lexer::Token,
    },
};

/// Applies an arithmetic operator to two values.
///
/// Returns `None` when dividing by zero. Every other result follows IEEE-754,
/// so an overflowing product is infinite rather than an error.
///
/// # Example
/// ```
/// use climb::{ast::BinaryOperator, interpreter::evaluator::binary::apply_binary};
///
/// assert_eq!(apply_binary(BinaryOperator::Sub, 10.0, 3.0), Some(7.0));
/// assert_eq!(apply_binary(BinaryOperator::Div, 1.0, 4.0), Some(0.25));
/// assert_eq!(apply_binary(BinaryOperator::Div, 1.0, 0.0), None);
/// assert_eq!(apply_binary(BinaryOperator::Mul, f64::MAX, 2.0), Some(f64::INFINITY));
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn apply_binary(op: BinaryOperator, left: f64, right: f64) -> Option<f64> {
    match op {
        BinaryOperator::Add => Some(left + right),
        BinaryOperator::Sub => Some(left - right),
        BinaryOperator::Mul => Some(left * right),
        BinaryOperator::Div => {
            if right == 0.0 {
                return None;
            }
            Some(left / right)
        },
    }
}

/// Evaluates an infix node, left operand first.
pub(in crate::interpreter::evaluator) fn eval_infix(node: &Expr,
                                                    operator: &Token,
                                                    left: &Expr,
                                                    right: &Expr)
                                                    -> EvalResult<f64> {
    let Some(op) = BinaryOperator::from_kind(&operator.kind) else {
        return Err(unsupported(node));
    };

    let left = evaluate(left)?;
    let right = evaluate(right)?;

    apply_binary(op, left, right).ok_or_else(|| RuntimeError::DivisionByZero { node:     node.to_string(),
                                                                               position: operator.position, })
}
