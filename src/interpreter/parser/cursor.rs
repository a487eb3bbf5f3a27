use tracing::trace;

use crate::interpreter::lexer::{Lexer, Token, TokenKind};

/// One-token lookahead over a [`Lexer`].
///
/// The cursor holds the token being looked at (`current`) and the one after
/// it (`peek`). Both are primed when the cursor is built. `None` in either
/// slot is the end-marker; once both slots are `None` the cursor is
/// exhausted and stays that way.
#[derive(Debug)]
pub struct TokenCursor<'src> {
    lexer:    Lexer<'src>,
    current:  Option<Token>,
    peek:     Option<Token>,
    position: usize,
}

impl<'src> TokenCursor<'src> {
    /// Creates a cursor and reads the first two tokens from `lexer`.
    ///
    /// ## Example
    /// ```
    /// use climb::{Lexer, interpreter::parser::cursor::TokenCursor};
    ///
    /// let mut cursor = TokenCursor::new(Lexer::new("a ++"));
    /// assert_eq!(cursor.current().map(|t| t.text.as_str()), Some("a"));
    /// assert_eq!(cursor.peek().map(|t| t.text.as_str()), Some("++"));
    ///
    /// cursor.advance();
    /// cursor.advance();
    /// assert!(cursor.is_exhausted());
    /// ```
    #[must_use]
    pub fn new(mut lexer: Lexer<'src>) -> Self {
        let current = lexer.next();
        let peek = lexer.next();
        Self { lexer,
               current,
               peek,
               position: 0 }
    }

    /// The token under the cursor, or `None` at the end of input.
    #[must_use]
    pub const fn current(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    /// The kind of the token under the cursor.
    #[must_use]
    pub fn current_kind(&self) -> Option<&TokenKind> {
        self.current.as_ref().map(|token| &token.kind)
    }

    /// The token after the current one.
    #[must_use]
    pub const fn peek(&self) -> Option<&Token> {
        self.peek.as_ref()
    }

    /// Stream position of the current slot.
    ///
    /// At the end of input this is the number of tokens in the stream.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Whether both slots hold the end-marker.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.current.is_none() && self.peek.is_none()
    }

    /// Moves the cursor forward by one token and returns the token that was
    /// current before the move.
    pub fn advance(&mut self) -> Option<Token> {
        let next = self.lexer.next();
        let previous = std::mem::replace(&mut self.current, self.peek.take());
        self.peek = next;

        if previous.is_some() {
            self.position += 1;
        }
        trace!(target: "climb::parser",
               position = self.position,
               current = ?self.current.as_ref().map(|t| &t.text),
               "Advanced cursor");

        previous
    }
}
