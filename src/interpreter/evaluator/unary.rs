use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        evaluator::core::{EvalResult, evaluate, unsupported},
        lexer::Token,
    },
};

/// Applies a sign operator to a value.
///
/// Returns `None` for `Increment` and `Decrement`, which need a variable to
/// update and have no meaning on a bare number.
///
/// # Example
/// ```
/// use climb::{ast::UnaryOperator, interpreter::evaluator::unary::apply_unary};
///
/// assert_eq!(apply_unary(UnaryOperator::Negate, 5.0), Some(-5.0));
/// assert_eq!(apply_unary(UnaryOperator::Plus, -2.5), Some(-2.5));
/// assert_eq!(apply_unary(UnaryOperator::Increment, 1.0), None);
/// ```
#[must_use]
pub const fn apply_unary(op: UnaryOperator, value: f64) -> Option<f64> {
    match op {
        UnaryOperator::Plus => Some(value),
        UnaryOperator::Negate => Some(-value),
        UnaryOperator::Increment | UnaryOperator::Decrement => None,
    }
}

/// Evaluates a prefix node.
///
/// The operator is checked before the operand is touched, so `++ a` is
/// reported as a whole rather than through its identifier.
pub(in crate::interpreter::evaluator) fn eval_prefix(node: &Expr,
                                                     operator: &Token,
                                                     operand: &Expr)
                                                     -> EvalResult<f64> {
    let op = match UnaryOperator::from_kind(&operator.kind) {
        Some(op @ (UnaryOperator::Plus | UnaryOperator::Negate)) => op,
        _ => return Err(unsupported(node)),
    };

    let value = evaluate(operand)?;
    apply_unary(op, value).ok_or_else(|| unsupported(node))
}
