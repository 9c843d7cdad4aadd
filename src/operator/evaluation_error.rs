use crate::operator::NodeId;
use thiserror::Error;

/// An error raised while reducing a node of the expression tree to a number.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum EvaluationError {
    #[error("`{operator}` expects {expected} operand(s), but only {found} were attached")]
    MissingOperand {
        operator: String,
        expected: usize,
        found: usize,
    },
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Placeholder of an unrecognized element cannot be evaluated")]
    Placeholder,
    #[error("Node `{0}` does not exist")]
    UnknownNode(NodeId),
}
