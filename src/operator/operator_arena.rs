use crate::operator::Operator;
use crate::traits::JsonSerDe;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of an [`OperatorNode`] inside the [`OperatorArena`] that created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single node of the expression tree: an [`Operator`] and the ids of its operands,
/// in the order in which they were attached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OperatorNode {
    pub operator: Operator,
    pub operands: Vec<NodeId>,
}

/// Flat storage for all nodes of one document.
///
/// Nodes reference their operands by [`NodeId`], so the tree is never linked through
/// owning pointers and the whole arena can be serialized as-is. Each node is attached to
/// at most one parent; the arena itself does not check this, the builder guarantees it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OperatorArena {
    nodes: Vec<OperatorNode>,
}

impl OperatorArena {
    #[must_use]
    pub fn new() -> OperatorArena {
        OperatorArena::default()
    }

    /// Allocate a new operand-less node and return its id.
    pub fn push(&mut self, operator: Operator) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(OperatorNode {
            operator,
            operands: Vec::new(),
        });
        id
    }

    /// Allocate a new [`Operator::Literal`] node.
    pub fn push_literal(&mut self, value: f64) -> NodeId {
        self.push(Operator::Literal(value))
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&OperatorNode> {
        self.nodes.get(id.0)
    }

    /// Append `child` to the operands of `parent`. No arity checking happens here.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not allocated by this arena.
    pub fn add_operand(&mut self, parent: NodeId, child: NodeId) {
        self.nodes
            .get_mut(parent.0)
            .expect("Invariant violation: Parent node is not part of this arena.")
            .operands
            .push(child);
    }

    /// Detach and return all operands of the given node (used to forward the operands
    /// of a placeholder to its parent).
    ///
    /// # Panics
    ///
    /// Panics if `id` was not allocated by this arena.
    pub fn take_operands(&mut self, id: NodeId) -> Vec<NodeId> {
        let node = self
            .nodes
            .get_mut(id.0)
            .expect("Invariant violation: Node is not part of this arena.");
        std::mem::take(&mut node.operands)
    }

    #[must_use]
    pub fn nodes(&self) -> &[OperatorNode] {
        &self.nodes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop all nodes. Previously issued ids become invalid.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl<'de> JsonSerDe<'de> for OperatorArena {}
