use std::fmt;

use serde::Serialize;

use crate::interpreter::lexer::{Token, TokenKind};

/// An abstract syntax tree node for an arithmetic expression.
///
/// Every node owns its children outright. Parentheses are not represented;
/// they only shape the tree. The parser never hands out a partially built
/// node, so every child of an `Expr` is itself complete.
///
/// `Display` renders the tree fully parenthesized with whitespace between
/// every token, which the parser reads back into the same shape:
///
/// ```
/// let expr = climb::parse("a * ( b + c )").unwrap().unwrap();
/// assert_eq!(expr.to_string(), "( a * ( b + c ) )");
///
/// let again = climb::parse(&expr.to_string()).unwrap().unwrap();
/// assert_eq!(again.to_string(), expr.to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type")]
pub enum Expr {
    /// A number or identifier.
    Literal {
        /// The source token, of kind `Number` or `Identifier`.
        token: Token,
    },
    /// An operator applied before its operand (`- x`, `++ x`).
    Prefix {
        /// The operator token.
        operator: Token,
        /// The operand expression.
        operand:  Box<Self>,
    },
    /// An operator applied after its operand (`x ++`).
    ///
    /// The operand is always a [`Expr::Literal`].
    Postfix {
        /// The operator token.
        operator: Token,
        /// The operand expression.
        operand:  Box<Self>,
    },
    /// A binary operation.
    Infix {
        /// The operator token.
        operator: Token,
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
    },
}

impl Expr {
    /// Gets the stream position of the first token of `self`.
    /// ## Example
    /// ```
    /// let expr = climb::parse("( 1 + 2 ) * 3").unwrap().unwrap();
    ///
    /// // The group is not a node, so the tree starts at the `1`.
    /// assert_eq!(expr.position(), 1);
    /// ```
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            Self::Literal { token } => token.position,
            Self::Prefix { operator, .. } => operator.position,
            Self::Postfix { operand, .. } => operand.position(),
            Self::Infix { left, .. } => left.position(),
        }
    }

    /// Gets the name of the node variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Literal { .. } => "literal",
            Self::Prefix { .. } => "prefix",
            Self::Postfix { .. } => "postfix",
            Self::Infix { .. } => "infix",
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { token } => write!(f, "{token}"),
            Self::Prefix { operator, operand } => write!(f, "( {operator} {operand} )"),
            Self::Postfix { operator, operand } => write!(f, "( {operand} {operator} )"),
            Self::Infix { operator,
                          left,
                          right, } => write!(f, "( {left} {operator} {right} )"),
        }
    }
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Maps a token kind to the binary operator it spells, if any.
    #[must_use]
    pub const fn from_kind(kind: &TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Sub),
            TokenKind::Star => Some(Self::Mul),
            TokenKind::Slash => Some(Self::Div),
            _ => None,
        }
    }
}

/// Represents a unary operator in prefix or postfix position.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Unary plus (`+ x`).
    Plus,
    /// Arithmetic negation (`- x`).
    Negate,
    /// Increment (`++`).
    Increment,
    /// Decrement (`--`).
    Decrement,
}

impl UnaryOperator {
    /// Maps a token kind to the unary operator it spells, if any.
    #[must_use]
    pub const fn from_kind(kind: &TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Plus),
            TokenKind::Minus => Some(Self::Negate),
            TokenKind::Increment => Some(Self::Increment),
            TokenKind::Decrement => Some(Self::Decrement),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::Increment => "++",
            Self::Decrement => "--",
        };
        write!(f, "{operator}")
    }
}
