use crate::builder::{BuilderError, MarkupEvent, MarkupHandler, UnrecognizedElement};
use crate::config::{EvaluatorConfig, UnrecognizedElementPolicy};
use crate::operator::{NodeId, Operator, OperatorArena, create_op};
use crate::reporting::{ErrorReporter, VecReporter};
use crate::utils::take_if_not_blank;
use tracing::{debug, warn};

/// Observable state of a [`StackBuilder`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuilderState {
    /// No document in progress, the stack is empty.
    Idle,
    /// A document is in progress, the stack holds at least one node.
    Building,
    /// The current document failed. The remaining events of the document are skipped;
    /// `depth` is the number of elements that still have to close.
    Faulted { depth: usize },
}

/// Builds and reduces an expression tree while markup events stream in.
///
/// Every open event pushes exactly one node (a placeholder for unrecognized names), every
/// close event pops exactly one, so the stack depth always equals the element nesting
/// depth. A popped node is attached to the node below it; when nothing is below it, it is
/// the root of the document and it is evaluated right away.
///
/// One builder handles one document at a time, but it can be reused for any number of
/// documents in sequence. A failed document never leaks state into the next one.
#[derive(Clone, Debug)]
pub struct StackBuilder {
    config: EvaluatorConfig,
    arena: OperatorArena,
    stack: Vec<NodeId>,
    faulted_depth: Option<usize>,
    warnings: VecReporter<UnrecognizedElement>,
}

impl Default for StackBuilder {
    fn default() -> Self {
        StackBuilder::new(EvaluatorConfig::default())
    }
}

impl StackBuilder {
    #[must_use]
    pub fn new(config: EvaluatorConfig) -> StackBuilder {
        StackBuilder {
            config,
            arena: OperatorArena::new(),
            stack: Vec::new(),
            faulted_depth: None,
            warnings: VecReporter::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> BuilderState {
        if let Some(depth) = self.faulted_depth {
            BuilderState::Faulted { depth }
        } else if self.stack.is_empty() {
            BuilderState::Idle
        } else {
            BuilderState::Building
        }
    }

    /// Current number of open elements of the document in progress.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Nodes allocated for the document in progress.
    #[must_use]
    pub fn arena(&self) -> &OperatorArena {
        &self.arena
    }

    /// Unrecognized elements skipped since the last call to [`StackBuilder::take_warnings`].
    #[must_use]
    pub fn warnings(&self) -> &[UnrecognizedElement] {
        self.warnings.errors()
    }

    pub fn take_warnings(&mut self) -> Vec<UnrecognizedElement> {
        self.warnings.take()
    }

    /// Drop the document in progress (if any) and return to [`BuilderState::Idle`].
    pub fn reset(&mut self) {
        self.arena.clear();
        self.stack.clear();
        self.faulted_depth = None;
        self.warnings.take();
    }

    /// Deliver one owned event, see [`MarkupEvent::dispatch`].
    pub fn handle(&mut self, event: &MarkupEvent) -> Result<Option<f64>, BuilderError> {
        event.dispatch(self)
    }

    /// Abandon the current document. `open` is the number of its elements which are
    /// still open and whose close events must be swallowed.
    fn fault(&mut self, error: BuilderError, open: usize) -> BuilderError {
        debug!(%error, open, "document aborted");
        self.arena.clear();
        self.stack.clear();
        self.faulted_depth = (open > 0).then_some(open);
        error
    }

    /// Finish the document: `node` was just popped and the stack is empty.
    fn reduce_root(&mut self, name: &str, node: NodeId) -> Result<f64, BuilderError> {
        let root = if self.is_placeholder(node) {
            let operands = self.arena.take_operands(node);
            match operands.as_slice() {
                [single] => *single,
                _ => {
                    let error = BuilderError::UnresolvedPlaceholder {
                        name: name.to_string(),
                        operands: operands.len(),
                    };
                    return Err(self.fault(error, 0));
                }
            }
        } else {
            node
        };

        let result = self.arena.evaluate(root, self.config.division_by_zero);
        self.arena.clear();
        match result {
            Ok(value) => {
                debug!(value, "document evaluated");
                Ok(value)
            }
            Err(error) => Err(self.fault(error.into(), 0)),
        }
    }

    fn is_placeholder(&self, node: NodeId) -> bool {
        self.arena
            .get(node)
            .is_some_and(|node| node.operator.is_placeholder())
    }
}

impl MarkupHandler for StackBuilder {
    fn element_open(&mut self, name: &str) -> Result<(), BuilderError> {
        if let Some(depth) = self.faulted_depth.as_mut() {
            *depth += 1;
            return Ok(());
        }

        debug!(element = name, depth = self.stack.len(), "enters");
        let operator = match create_op(name) {
            Some(operator) => operator,
            None => {
                let unrecognized = UnrecognizedElement {
                    name: name.to_string(),
                    depth: self.stack.len(),
                };
                match self.config.unrecognized_element {
                    UnrecognizedElementPolicy::Forward => {
                        warn!(element = name, "skipping unrecognized element");
                        self.warnings.report(unrecognized);
                        Operator::Ignored
                    }
                    UnrecognizedElementPolicy::Fail => {
                        let open = self.stack.len() + 1;
                        return Err(self.fault(unrecognized.into(), open));
                    }
                }
            }
        };

        let node = self.arena.push(operator);
        self.stack.push(node);
        Ok(())
    }

    fn text(&mut self, content: &str) -> Result<(), BuilderError> {
        if self.faulted_depth.is_some() {
            return Ok(());
        }
        let Some(text) = take_if_not_blank(content) else {
            return Ok(());
        };

        debug!(text = %text, "chars");
        let Some(&top) = self.stack.last() else {
            return Err(BuilderError::StackUnderflow {
                event: format!("text `{text}`"),
            });
        };
        let Ok(value) = text.parse::<f64>() else {
            let open = self.stack.len();
            return Err(self.fault(BuilderError::MalformedNumericText { text }, open));
        };

        let literal = self.arena.push_literal(value);
        self.arena.add_operand(top, literal);
        Ok(())
    }

    fn element_close(&mut self, name: &str) -> Result<Option<f64>, BuilderError> {
        if let Some(depth) = self.faulted_depth {
            self.faulted_depth = depth.checked_sub(1).filter(|depth| *depth > 0);
            return Ok(None);
        }

        let Some(node) = self.stack.pop() else {
            return Err(BuilderError::StackUnderflow {
                event: format!("close of `{name}`"),
            });
        };
        debug!(element = name, depth = self.stack.len(), "leaves");

        let Some(&parent) = self.stack.last() else {
            return self.reduce_root(name, node).map(Some);
        };
        if self.is_placeholder(node) {
            for operand in self.arena.take_operands(node) {
                self.arena.add_operand(parent, operand);
            }
        } else {
            self.arena.add_operand(parent, node);
        }
        Ok(None)
    }
}
