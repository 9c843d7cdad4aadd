use crate::operator::Operator;

/// Element name of the [`Operator::Addition`] node.
pub const ADDITION: &str = "Addition";
/// Element name of the [`Operator::Subtraction`] node.
pub const SUBTRACTION: &str = "Subtraction";
/// Element name of the [`Operator::Division`] node.
pub const DIVISION: &str = "Division";
/// Element name of the [`Operator::Conditional`] node.
pub const CONDITIONAL: &str = "Conditional";
/// Element name of the [`Operator::PassThrough`] node (a container that means a number).
pub const PASS_THROUGH: &str = "int";

/// Map an element name to a fresh, operand-less [`Operator`].
///
/// Names are matched case-sensitively. Unknown names yield `None`; it is up to the caller
/// to report them (see [`crate::builder::StackBuilder`]). Literals are never created here,
/// they come from element text.
#[must_use]
pub fn create_op(name: &str) -> Option<Operator> {
    match name {
        ADDITION => Some(Operator::Addition),
        SUBTRACTION => Some(Operator::Subtraction),
        DIVISION => Some(Operator::Division),
        CONDITIONAL => Some(Operator::Conditional),
        PASS_THROUGH => Some(Operator::PassThrough),
        _ => None,
    }
}
