use std::{fmt, iter::FusedIterator, str::SplitWhitespace};

use logos::Logos;
use ordered_float::OrderedFloat;
use serde::Serialize;
use tracing::trace;

/// The syntactic kind of a [`Token`].
///
/// The kind is kept separate from the token's text so that the parser
/// dispatches on an enum rather than on strings. Any word that is neither a
/// literal nor one of the known operators keeps its exact text in
/// [`TokenKind::Other`]; two such tokens are of the same kind only when their
/// text is identical.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// Numeric literal, such as `42`, `3.14` or `.5`.
    Number,
    /// Identifier made of letters, `_` and `$`, such as `a` or `$_x`.
    Identifier,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `++`
    Increment,
    /// `--`
    Decrement,
    /// Any other word, keyed by its exact text.
    Other(String),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Number => "number",
            Self::Identifier => "identifier",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Increment => "++",
            Self::Decrement => "--",
            Self::Other(text) => text,
        };
        write!(f, "{kind}")
    }
}

/// A single classified word of the input.
///
/// Tokens are produced once by the [`Lexer`] and never mutated afterwards.
/// `position` is the zero-based index of the token in the stream and is what
/// error messages report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    /// The syntactic kind.
    pub kind:     TokenKind,
    /// The exact source text of the word.
    pub text:     String,
    /// The parsed value, present only for [`TokenKind::Number`].
    pub value:    Option<OrderedFloat<f64>>,
    /// Index of the token within the token stream.
    pub position: usize,
}

impl Token {
    /// Returns the numeric value of a number token.
    ///
    /// ## Example
    /// ```
    /// use climb::Lexer;
    ///
    /// let tokens = Lexer::tokenize(".5 a");
    /// assert_eq!(tokens[0].number(), Some(0.5));
    /// assert_eq!(tokens[1].number(), None);
    /// ```
    #[must_use]
    pub fn number(&self) -> Option<f64> {
        self.value.map(OrderedFloat::into_inner)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Lexemes recognised inside a single whitespace-free word.
///
/// A word is only given one of these kinds when one lexeme spans all of it,
/// so `1+2` or `a1` fall through to [`TokenKind::Other`].
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum Lexeme {
    #[regex(r"[0-9]+", parse_number)]
    #[regex(r"[0-9]*\.[0-9]+", parse_number)]
    Number(f64),
    #[regex(r"[A-Za-z_$]+")]
    Identifier,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("++")]
    Increment,
    #[token("--")]
    Decrement,
}

/// Parses a decimal literal from the current lexeme slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid float, which turns the word into an
///   [`TokenKind::Other`] token.
fn parse_number(lex: &logos::Lexer<Lexeme>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Classifies one word into a token.
fn classify(word: &str, position: usize) -> Token {
    let mut lex = Lexeme::lexer(word);
    let lexeme = match lex.next() {
        Some(Ok(lexeme)) if lex.span() == (0..word.len()) => Some(lexeme),
        _ => None,
    };

    let (kind, value) = match lexeme {
        Some(Lexeme::Number(n)) => (TokenKind::Number, Some(OrderedFloat(n))),
        Some(Lexeme::Identifier) => (TokenKind::Identifier, None),
        Some(Lexeme::LParen) => (TokenKind::LParen, None),
        Some(Lexeme::RParen) => (TokenKind::RParen, None),
        Some(Lexeme::Plus) => (TokenKind::Plus, None),
        Some(Lexeme::Minus) => (TokenKind::Minus, None),
        Some(Lexeme::Star) => (TokenKind::Star, None),
        Some(Lexeme::Slash) => (TokenKind::Slash, None),
        Some(Lexeme::Increment) => (TokenKind::Increment, None),
        Some(Lexeme::Decrement) => (TokenKind::Decrement, None),
        None => (TokenKind::Other(word.to_string()), None),
    };

    Token { kind,
            text: word.to_string(),
            value,
            position }
}

/// Splits the source on whitespace and classifies each word lazily.
///
/// The lexer never fails: unknown words become [`TokenKind::Other`] tokens
/// and are rejected later by the parser. Once every word has been produced
/// [`Iterator::next`] keeps returning `None`, which is the end-marker of the
/// stream. [`Lexer::reset`] restarts the stream from the first word.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    source: &'src str,
    words:  SplitWhitespace<'src>,
    at:     usize,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over `source`. No work is done until the first token
    /// is requested.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source,
               words: source.split_whitespace(),
               at: 0 }
    }

    /// Restarts the stream from the first word.
    pub fn reset(&mut self) {
        trace!(target: "climb::lexer", "Restarting token stream");
        self.words = self.source.split_whitespace();
        self.at = 0;
    }

    /// Tokenizes the whole of `source` at once.
    ///
    /// ## Example
    /// ```
    /// use climb::{Lexer, TokenKind};
    ///
    /// let kinds: Vec<TokenKind> = Lexer::tokenize("1 * ( x ++ )").into_iter()
    ///                                                             .map(|t| t.kind)
    ///                                                             .collect();
    /// assert_eq!(kinds,
    ///            [TokenKind::Number,
    ///             TokenKind::Star,
    ///             TokenKind::LParen,
    ///             TokenKind::Identifier,
    ///             TokenKind::Increment,
    ///             TokenKind::RParen]);
    /// ```
    #[must_use]
    pub fn tokenize(source: &'src str) -> Vec<Token> {
        Self::new(source).collect()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let word = self.words.next()?;
        let token = classify(word, self.at);
        trace!(target: "climb::lexer", position = self.at, kind = %token.kind, text = word, "Produced token");
        self.at += 1;
        Some(token)
    }
}

impl FusedIterator for Lexer<'_> {}
