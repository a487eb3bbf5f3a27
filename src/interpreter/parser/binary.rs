use crate::{
    ast::Expr,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

/// Looks up the infix precedence of a token kind.
///
/// Returns `None` for kinds that are not binary operators.
///
/// # Example
/// ```
/// use climb::{
///     TokenKind,
///     interpreter::parser::{binary::infix_precedence, core::Precedence},
/// };
///
/// assert_eq!(infix_precedence(&TokenKind::Minus), Some(Precedence::Sum));
/// assert_eq!(infix_precedence(&TokenKind::Slash), Some(Precedence::Product));
/// assert_eq!(infix_precedence(&TokenKind::Increment), None);
/// ```
#[must_use]
pub const fn infix_precedence(kind: &TokenKind) -> Option<Precedence> {
    match kind {
        TokenKind::Plus | TokenKind::Minus => Some(Precedence::Sum),
        TokenKind::Star | TokenKind::Slash => Some(Precedence::Product),
        TokenKind::Number
        | TokenKind::Identifier
        | TokenKind::LParen
        | TokenKind::RParen
        | TokenKind::Increment
        | TokenKind::Decrement
        | TokenKind::Other(_) => None,
    }
}

impl Parser<'_> {
    /// Parses the binary operator under the cursor and its right operand.
    ///
    /// The right side is parsed with the operator's own precedence as the
    /// minimum, so a following operator of the same precedence is left for
    /// the caller's loop: `a - b - c` is `( a - b ) - c`.
    ///
    /// If the operator does not bind tighter than `min_precedence`, `left` is
    /// returned untouched and nothing is consumed.
    ///
    /// Grammar: `infix := expression op expression[precedence(op)]`
    pub(in crate::interpreter::parser) fn parse_infix(&mut self,
                                                       left: Expr,
                                                       min_precedence: Precedence)
                                                       -> ParseResult<Expr> {
        let Some(precedence) = self.cursor.current_kind().and_then(infix_precedence) else {
            return Ok(left);
        };
        if precedence <= min_precedence {
            return Ok(left);
        }

        let operator = self.consume()?;
        let right = self.parse_expression(precedence)?;

        Ok(Expr::Infix { operator,
                         left: Box::new(left),
                         right: Box::new(right) })
    }
}
