/// Core evaluation logic.
///
/// Contains the recursive `evaluate` entry point and the reduction of
/// literals.
pub mod core;

/// Unary operator evaluation.
///
/// Handles prefix `+` and `-`; increment and decrement are rejected.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements `+ - * /` on `f64` operands.
pub mod binary;
