/// Infix operators.
///
/// Holds the precedence table for `+ - * /` and the rule that folds a binary
/// operator and its right operand into the tree.
pub mod binary;

/// Parser state and the precedence-climbing loop.
///
/// Contains the `Parser` type, its entry point and the shared
/// `parse_expression` routine every rule recurses through.
pub mod core;

/// Token lookahead.
pub mod cursor;

/// Prefix and postfix positions.
///
/// Implements grouping, prefix operators, literals and the single postfix
/// suffix a literal may carry.
pub mod unary;
