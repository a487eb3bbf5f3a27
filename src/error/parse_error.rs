#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
pub enum ParseError {
    /// The current token cannot start an expression.
    UnresolvableToken {
        /// The text of the offending token.
        token:    String,
        /// The stream position where the error occurred.
        position: usize,
    },
    /// An operand was required but the token stream ended.
    ///
    /// Inputs such as `1 +`, `-` and `(` land here rather than in
    /// [`ParseError::UnresolvableToken`], since there is no token to name.
    UnexpectedEndOfInput {
        /// The stream position where the error occurred.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    UnmatchedParen {
        /// The token found instead, or `None` at the end of input.
        found:    Option<String>,
        /// The stream position where the error occurred.
        position: usize,
    },
    /// Tokens remain after a complete expression was parsed.
    TrailingTokens {
        /// The first unconsumed token.
        token:    String,
        /// The stream position where the error occurred.
        position: usize,
    },
    /// The expression nests deeper than the parser allows, through
    /// parentheses, prefix operators or chained infix operators.
    NestingTooDeep {
        /// The configured nesting limit.
        limit:    usize,
        /// The stream position where the error occurred.
        position: usize,
    },
}

impl ParseError {
    /// Gets the stream position the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnresolvableToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::UnmatchedParen { position, .. }
            | Self::TrailingTokens { position, .. }
            | Self::NestingTooDeep { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnresolvableToken { token, position } => write!(f,
                                                                  "Error at token {position}: Cannot resolve token '{token}'."),

            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Error at token {position}: Unexpected end of input.")
            },

            Self::UnmatchedParen { found: Some(found),
                                   position, } => write!(f,
                                                         "Error at token {position}: Expected closing parenthesis ')' but found '{found}'."),

            Self::UnmatchedParen { found: None,
                                   position, } => write!(f,
                                                         "Error at token {position}: Expected closing parenthesis ')' but none found."),

            Self::TrailingTokens { token, position } => write!(f,
                                                               "Error at token {position}: Extra tokens after expression, starting at '{token}'."),

            Self::NestingTooDeep { limit, position } => write!(f,
                                                               "Error at token {position}: Expression nests deeper than {limit} levels."),
        }
    }
}

impl std::error::Error for ParseError {}
