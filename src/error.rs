/// Parsing errors.
///
/// Defines all error types that can occur while turning a token stream into
/// an expression tree: tokens that cannot start an expression, unbalanced
/// parentheses, leftover tokens and excessive nesting.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error types raised during evaluation, such as nodes the
/// evaluator cannot reduce and division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
