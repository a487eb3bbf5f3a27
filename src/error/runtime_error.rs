#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
pub enum RuntimeError {
    /// The evaluator has no rule for this node: identifiers, and increment
    /// or decrement in either position.
    UnsupportedNode {
        /// The rendering of the offending node.
        node:     String,
        /// The stream position of the node.
        position: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The rendering of the division node.
        node:     String,
        /// The stream position of the node.
        position: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedNode { node, position } => write!(f,
                                                               "Error at token {position}: Cannot evaluate '{node}'."),
            Self::DivisionByZero { node, position } => {
                write!(f, "Error at token {position}: Division by zero in '{node}'.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
