use serde::{Deserialize, Serialize};

/// Trait that provides methods to serialize and deserialize objects into (from) JSON,
/// utilizing [serde].
///
/// Implemented by [`crate::EvaluatorConfig`] (configuration files) and
/// [`crate::operator::OperatorArena`] (snapshots of a partially built expression tree).
pub trait JsonSerDe<'de>: Sized + Serialize + Deserialize<'de> {
    /// Wrapper for json serialization.
    fn to_json_str(&self) -> String {
        serde_json::to_string(self)
            .expect("Invariant violation: Serialization to JSON cannot fail.")
    }

    /// Wrapper for *pretty* json serialization with indentation.
    fn to_pretty_json_str(&self) -> String {
        serde_json::to_string_pretty(self)
            .expect("Invariant violation: Serialization to JSON cannot fail.")
    }

    /// Wrapper for json de-serialization.
    fn from_json_str(s: &'de str) -> Result<Self, String> {
        serde_json::from_str(s).map_err(|e| e.to_string())
    }
}
