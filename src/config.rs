use crate::traits::JsonSerDe;
use serde::{Deserialize, Serialize};

/// What the builder does with an element whose name has no operator.
#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnrecognizedElementPolicy {
    /// Report a warning and push an inert placeholder which hands its operands to the
    /// enclosing element when it closes.
    #[default]
    Forward,
    /// Abort the current document.
    Fail,
}

/// How `Division` treats a zero divisor.
#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivisionPolicy {
    /// Plain floating-point division: the result is an infinity or NaN.
    #[default]
    Ieee,
    /// Abort the current document with a division-by-zero error.
    Error,
}

/// Evaluation settings shared by [`crate::builder::StackBuilder`] and [`crate::Evaluator`].
///
/// Can be loaded from JSON, e.g. `{"unrecognized_element": "Fail"}`; missing fields
/// take their default values.
#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct EvaluatorConfig {
    pub unrecognized_element: UnrecognizedElementPolicy,
    pub division_by_zero: DivisionPolicy,
}

impl<'de> JsonSerDe<'de> for EvaluatorConfig {}
