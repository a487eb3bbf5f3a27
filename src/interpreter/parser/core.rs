use tracing::{debug, trace};

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        parser::{binary::infix_precedence, cursor::TokenCursor, unary::prefix_rule},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Default limit on how deeply expressions may nest.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Binding strength of operators.
///
/// The parser only descends into an infix operator whose precedence is
/// strictly greater than the current minimum, which makes operators of equal
/// precedence associate to the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    /// Starting level of a full expression.
    Lowest  = 0,
    /// `+` and `-`.
    Sum     = 1,
    /// `*` and `/`.
    Product = 2,
    /// Operand of a prefix operator; tighter than any binary operator.
    Prefix  = 9,
}

/// A precedence-climbing parser over one token stream.
///
/// A parser owns its cursor and is used for a single input. Building it reads
/// the first two tokens.
///
/// ## Example
/// ```
/// use climb::{Lexer, Parser};
///
/// let expr = Parser::new(Lexer::new("1 + 2 * 3")).parse().unwrap().unwrap();
/// assert_eq!(expr.to_string(), "( 1 + ( 2 * 3 ) )");
///
/// assert_eq!(Parser::new(Lexer::new("   ")).parse().unwrap(), None);
/// ```
#[derive(Debug)]
pub struct Parser<'src> {
    pub(in crate::interpreter::parser) cursor: TokenCursor<'src>,
    depth:                                      usize,
    max_depth:                                  usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser with the default nesting limit.
    #[must_use]
    pub fn new(lexer: Lexer<'src>) -> Self {
        Self::with_max_depth(lexer, DEFAULT_MAX_DEPTH)
    }

    /// Creates a parser that rejects expressions nesting deeper than
    /// `max_depth` levels.
    #[must_use]
    pub fn with_max_depth(lexer: Lexer<'src>, max_depth: usize) -> Self {
        Self { cursor: TokenCursor::new(lexer),
               depth: 0,
               max_depth }
    }

    /// Parses the whole token stream into a single expression.
    ///
    /// Returns `Ok(None)` when the stream holds no tokens at all, which is
    /// the only way an input with nothing to parse differs from a syntax
    /// error.
    ///
    /// # Errors
    /// - Any error raised while parsing the expression.
    /// - `TrailingTokens` if tokens remain after the expression.
    pub fn parse(&mut self) -> ParseResult<Option<Expr>> {
        if self.cursor.is_exhausted() {
            debug!(target: "climb::parser", "Nothing to parse");
            return Ok(None);
        }

        let expr = self.parse_expression(Precedence::Lowest)?;

        if let Some(token) = self.cursor.current() {
            return Err(ParseError::TrailingTokens { token:    token.text.clone(),
                                                    position: token.position, });
        }

        debug!(target: "climb::parser", %expr, "Parsed expression");
        Ok(Some(expr))
    }

    /// Parses an expression whose infix operators all bind tighter than
    /// `min_precedence`.
    ///
    /// The current token selects a prefix rule that produces the left
    /// operand. Infix operators are then folded in for as long as the current
    /// token binds more strongly than `min_precedence`.
    ///
    /// # Errors
    /// - `UnexpectedEndOfInput` if the stream ends where an operand is
    ///   required.
    /// - `UnresolvableToken` if the current token cannot start an expression.
    /// - `NestingTooDeep` if the nesting limit is exceeded. Grouping, prefix
    ///   operators and every folded infix operator each count as one level,
    ///   so a long flat chain such as `1 + 1 + ... + 1` is limited too.
    pub(in crate::interpreter::parser) fn parse_expression(&mut self,
                                                            min_precedence: Precedence)
                                                            -> ParseResult<Expr> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep { limit:    self.max_depth,
                                                    position: self.cursor.position(), });
        }

        let depth = self.depth;
        self.depth += 1;
        let result = self.climb(min_precedence);
        self.depth = depth;
        result
    }

    fn climb(&mut self, min_precedence: Precedence) -> ParseResult<Expr> {
        let token = self.cursor
                        .current()
                        .ok_or(ParseError::UnexpectedEndOfInput { position:
                                                                      self.cursor.position(), })?;
        let rule = prefix_rule(&token.kind).ok_or_else(|| {
                                               ParseError::UnresolvableToken { token:    token.text.clone(),
                                                                               position: token.position, }
                                           })?;

        trace!(target: "climb::parser", ?rule, ?min_precedence, depth = self.depth, "Prefix position");
        let mut left = self.parse_prefix(rule)?;

        while let Some(precedence) = self.cursor.current_kind().and_then(infix_precedence)
              && precedence > min_precedence
        {
            // Each fold puts `left` one level deeper in the tree.
            self.depth += 1;
            left = self.parse_infix(left, min_precedence)?;
        }

        Ok(left)
    }

    /// Consumes the current token.
    ///
    /// # Errors
    /// `UnexpectedEndOfInput` if the cursor is at the end of input.
    pub(in crate::interpreter::parser) fn consume(&mut self) -> ParseResult<Token> {
        let position = self.cursor.position();
        self.cursor
            .advance()
            .ok_or(ParseError::UnexpectedEndOfInput { position })
    }
}
