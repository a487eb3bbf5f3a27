/// The evaluator module reduces expression trees to numbers.
///
/// The evaluator walks the tree recursively, applying the sign and
/// arithmetic operators to `f64` operands. There is no variable store, so
/// identifiers and increment/decrement nodes are parsed but not evaluated.
///
/// # Responsibilities
/// - Evaluates literals, prefix sign operators and binary arithmetic.
/// - Reports nodes it cannot reduce and division by zero.
pub mod evaluator;
/// The lexer module tokenizes source text for the parser.
///
/// The input is split on runs of whitespace and each word is classified on
/// its own as a number, an identifier, a known operator or an opaque word.
/// Tokenizing never fails; words nothing can start with are rejected by the
/// parser instead.
///
/// # Responsibilities
/// - Produces a lazy, restartable stream of typed tokens.
/// - Parses numeric literals and records each token's stream position.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// A precedence-climbing parser dispatches on the kind of the current token
/// for the prefix, infix and postfix positions. The same token, such as
/// `++`, is a prefix operator before an operand and a postfix operator
/// after a literal.
///
/// # Responsibilities
/// - Resolves operator precedence and left associativity.
/// - Reports syntax errors with the position of the offending token.
/// - Bounds recursion on deeply nested input.
pub mod parser;
