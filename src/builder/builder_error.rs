use crate::operator::EvaluationError;
use thiserror::Error;

/// An element whose name does not correspond to any operator.
///
/// With the default configuration this is only a warning: the element is replaced by a
/// placeholder and the document is still evaluated.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("Unrecognized element `{name}` at depth {depth}")]
pub struct UnrecognizedElement {
    pub name: String,
    pub depth: usize,
}

/// An error that aborts the evaluation of the current document.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum BuilderError {
    #[error(transparent)]
    UnrecognizedElement(#[from] UnrecognizedElement),
    #[error("Text `{text}` is not a number")]
    MalformedNumericText { text: String },
    #[error("Unexpected {event}: no element is open")]
    StackUnderflow { event: String },
    #[error("Unrecognized root element `{name}` holds {operands} operand(s), expected exactly one")]
    UnresolvedPlaceholder { name: String, operands: usize },
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}
