//! # climb
//!
//! climb parses whitespace-delimited arithmetic expressions such as
//! `1 + 2 * ( 3 - x ++ )` into a syntax tree using precedence climbing, and
//! evaluates trees made of numbers, `+ - * /`, grouping and unary signs.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum, whose nodes are literals and
/// prefix, postfix and infix operations, and the operator enums the
/// evaluator matches on. The tree is built by the parser and walked by the
/// evaluator.
///
/// # Responsibilities
/// - Defines the closed set of expression nodes.
/// - Renders trees in a fully parenthesized form the parser reads back.
/// - Maps operator tokens to arithmetic operators.
pub mod ast;
/// Provides error types for parsing and evaluation.
///
/// Every failure is terminal: the first error aborts the whole operation and
/// no partial tree or value is returned alongside it.
///
/// # Responsibilities
/// - Defines error enums for parser and evaluator failures.
/// - Attaches the stream position of the offending token.
pub mod error;
/// Ties together lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Tokenizes source text.
/// - Parses token streams with precedence climbing.
/// - Evaluates expression trees.
pub mod interpreter;

pub use crate::{
    ast::Expr,
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::core::{EvalResult, evaluate},
        lexer::{Lexer, Token, TokenKind},
        parser::core::{DEFAULT_MAX_DEPTH, ParseResult, Parser},
    },
};

/// Parses `source` into an expression tree.
///
/// Returns `Ok(None)` for empty or whitespace-only input.
///
/// # Errors
/// Returns a [`ParseError`] for the first syntax violation.
///
/// # Examples
/// ```
/// let expr = climb::parse("++ a").unwrap().unwrap();
/// assert_eq!(expr.to_string(), "( ++ a )");
///
/// assert_eq!(climb::parse("").unwrap(), None);
/// assert!(climb::parse("a b").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<Option<Expr>> {
    Parser::new(Lexer::new(source)).parse()
}

/// Parses and evaluates `source`.
///
/// Returns `Ok(None)` when the input holds nothing to evaluate, otherwise the
/// value of the expression.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use climb::get_result;
///
/// assert_eq!(get_result("1 + 2 * 3").unwrap(), Some(7.0));
/// assert_eq!(get_result("  ").unwrap(), None);
///
/// // Identifiers parse, but there is nothing to bind them to.
/// assert!(get_result("x + 1").is_err());
/// ```
pub fn get_result(source: &str) -> Result<Option<f64>, Box<dyn std::error::Error>> {
    let Some(expr) = parse(source)? else {
        return Ok(None);
    };

    let value = evaluate(&expr)?;
    debug!(target: "climb::evaluator", %expr, value, "Evaluated expression");

    Ok(Some(value))
}
