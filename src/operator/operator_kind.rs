use serde::{Deserialize, Serialize};
use std::fmt;

/// Operation carried by a single node of an arithmetic expression tree.
///
/// Every variant except [`Operator::Literal`] is created empty and receives its operands
/// while the document is being streamed. [`Operator::Ignored`] is never produced from an
/// element name; it stands in for elements the factory does not recognize so that the
/// evaluation stack stays aligned with element nesting.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Operator {
    Literal(f64),
    PassThrough,
    Addition,
    Subtraction,
    Division,
    Conditional,
    Ignored,
}

impl Operator {
    /// Number of operands the operator reads during evaluation.
    ///
    /// An [`Operator::Ignored`] placeholder is never evaluated, so its arity is zero.
    #[must_use]
    pub fn arity(&self) -> usize {
        match self {
            Operator::Literal(_) | Operator::Ignored => 0,
            Operator::PassThrough => 1,
            Operator::Addition
            | Operator::Subtraction
            | Operator::Division
            | Operator::Conditional => 2,
        }
    }

    /// True for the placeholder pushed in place of an unrecognized element.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Operator::Ignored)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Literal(value) => write!(f, "{value}"),
            Operator::PassThrough => write!(f, "int"),
            Operator::Addition => write!(f, "Addition"),
            Operator::Subtraction => write!(f, "Subtraction"),
            Operator::Division => write!(f, "Division"),
            Operator::Conditional => write!(f, "Conditional"),
            Operator::Ignored => write!(f, "<ignored>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Operator;

    #[test]
    fn test_arity() {
        assert_eq!(Operator::Literal(1.5).arity(), 0);
        assert_eq!(Operator::PassThrough.arity(), 1);
        assert_eq!(Operator::Addition.arity(), 2);
        assert_eq!(Operator::Subtraction.arity(), 2);
        assert_eq!(Operator::Division.arity(), 2);
        assert_eq!(Operator::Conditional.arity(), 2);
        assert_eq!(Operator::Ignored.arity(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Operator::Literal(0.5).to_string(), "0.5");
        assert_eq!(Operator::PassThrough.to_string(), "int");
        assert_eq!(Operator::Division.to_string(), "Division");
        assert!(Operator::Ignored.is_placeholder());
        assert!(!Operator::Addition.is_placeholder());
    }
}
