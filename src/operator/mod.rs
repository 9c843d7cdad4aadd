mod evaluation_error;
mod operator_arena;
mod operator_kind;

pub mod operator_factory;

pub use evaluation_error::EvaluationError;
pub use operator_arena::{NodeId, OperatorArena, OperatorNode};
pub use operator_factory::create_op;
pub use operator_kind::Operator;

mod _impl_evaluation;
