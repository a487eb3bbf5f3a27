use tracing::trace;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::eval_infix, unary::eval_prefix},
        lexer::TokenKind,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree to a number.
///
/// Numbers evaluate to their value, prefix `+`/`-` apply a sign and infix
/// nodes apply their arithmetic operator to both operands, left first.
/// There is no variable store, so identifiers, postfix nodes and prefix
/// `++`/`--` cannot be reduced.
///
/// # Errors
/// - `UnsupportedNode` for identifiers and increment/decrement nodes.
/// - `DivisionByZero` when a divisor evaluates to zero.
///
/// # Example
/// ```
/// use climb::{RuntimeError, evaluate, parse};
///
/// let expr = parse("- 3 * ( 2 + 3 )").unwrap().unwrap();
/// assert_eq!(evaluate(&expr).unwrap(), -15.0);
///
/// let expr = parse("a ++").unwrap().unwrap();
/// assert!(matches!(evaluate(&expr), Err(RuntimeError::UnsupportedNode { .. })));
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<f64> {
    let value = match expr {
        Expr::Literal { .. } => eval_literal(expr),
        Expr::Prefix { operator, operand } => eval_prefix(expr, operator, operand),
        Expr::Postfix { .. } => Err(unsupported(expr)),
        Expr::Infix { operator,
                      left,
                      right, } => eval_infix(expr, operator, left, right),
    }?;

    trace!(target: "climb::evaluator", kind = expr.kind(), position = expr.position(), value, "Reduced node");
    Ok(value)
}

/// Evaluates a literal leaf.
fn eval_literal(node: &Expr) -> EvalResult<f64> {
    match node {
        Expr::Literal { token } if token.kind == TokenKind::Number => {
            token.number().ok_or_else(|| unsupported(node))
        },
        _ => Err(unsupported(node)),
    }
}

/// Builds the error for a node the evaluator has no rule for.
pub(in crate::interpreter::evaluator) fn unsupported(node: &Expr) -> RuntimeError {
    RuntimeError::UnsupportedNode { node:     node.to_string(),
                                    position: node.position(), }
}
