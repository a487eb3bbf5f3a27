use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

/// The ways a token can start an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixRule {
    /// `(` expression `)`.
    Group,
    /// A prefix operator: `+`, `-`, `++` or `--`.
    Operator,
    /// A number or identifier, optionally followed by one postfix operator.
    Literal,
}

/// Looks up the prefix rule for a token kind.
///
/// Returns `None` for kinds that cannot start an expression.
///
/// # Example
/// ```
/// use climb::{
///     TokenKind,
///     interpreter::parser::unary::{PrefixRule, prefix_rule},
/// };
///
/// assert_eq!(prefix_rule(&TokenKind::Increment), Some(PrefixRule::Operator));
/// assert_eq!(prefix_rule(&TokenKind::Star), None);
/// ```
#[must_use]
pub const fn prefix_rule(kind: &TokenKind) -> Option<PrefixRule> {
    match kind {
        TokenKind::LParen => Some(PrefixRule::Group),
        TokenKind::Plus | TokenKind::Minus | TokenKind::Increment | TokenKind::Decrement => {
            Some(PrefixRule::Operator)
        },
        TokenKind::Number | TokenKind::Identifier => Some(PrefixRule::Literal),
        TokenKind::RParen | TokenKind::Star | TokenKind::Slash | TokenKind::Other(_) => None,
    }
}

/// Whether a token kind may follow a literal as a postfix operator.
#[must_use]
pub const fn is_postfix_operator(kind: &TokenKind) -> bool {
    matches!(kind, TokenKind::Increment | TokenKind::Decrement)
}

impl Parser<'_> {
    /// Runs the prefix rule selected for the current token.
    pub(in crate::interpreter::parser) fn parse_prefix(&mut self,
                                                        rule: PrefixRule)
                                                        -> ParseResult<Expr> {
        match rule {
            PrefixRule::Group => self.parse_group(),
            PrefixRule::Operator => self.parse_prefix_operator(),
            PrefixRule::Literal => self.parse_literal(),
        }
    }

    /// Parses a parenthesized expression.
    ///
    /// The parentheses only group; no node is produced for them.
    ///
    /// Grammar: `group := "(" expression ")"`
    ///
    /// # Errors
    /// `UnmatchedParen` if the inner expression is not followed by `)`.
    fn parse_group(&mut self) -> ParseResult<Expr> {
        self.consume()?;
        let inner = self.parse_expression(Precedence::Lowest)?;

        if !matches!(self.cursor.current_kind(), Some(TokenKind::RParen)) {
            return Err(ParseError::UnmatchedParen { found:    self.cursor
                                                                  .current()
                                                                  .map(|t| t.text.clone()),
                                                    position: self.cursor.position(), });
        }

        self.consume()?;
        Ok(inner)
    }

    /// Parses a prefix operator and its operand.
    ///
    /// The operand is parsed at [`Precedence::Prefix`], so `- a * b` is
    /// `( - a ) * b`. Prefix operators nest: `- - a` is `- ( - a )`.
    ///
    /// Grammar: `prefix := ("+" | "-" | "++" | "--") expression[Prefix]`
    fn parse_prefix_operator(&mut self) -> ParseResult<Expr> {
        let operator = self.consume()?;
        let operand = self.parse_expression(Precedence::Prefix)?;

        Ok(Expr::Prefix { operator,
                          operand: Box::new(operand) })
    }

    /// Parses a number or identifier and at most one postfix operator.
    ///
    /// Only a single suffix is taken, so `a ++ ++` leaves the second `++`
    /// for the caller, which rejects it as a trailing token.
    ///
    /// Grammar: `literal := (number | identifier) ("++" | "--")?`
    fn parse_literal(&mut self) -> ParseResult<Expr> {
        let suffixed = self.cursor
                           .peek()
                           .is_some_and(|t| is_postfix_operator(&t.kind));
        let literal = Expr::Literal { token: self.consume()? };

        if suffixed {
            self.parse_postfix(literal)
        } else {
            Ok(literal)
        }
    }

    /// Wraps an already parsed literal in the postfix operator under the
    /// cursor.
    ///
    /// Only reachable from [`Self::parse_literal`]; a postfix operator after
    /// a group or a composed expression is never consulted.
    fn parse_postfix(&mut self, operand: Expr) -> ParseResult<Expr> {
        let operator = self.consume()?;

        Ok(Expr::Postfix { operator,
                           operand: Box::new(operand) })
    }
}
