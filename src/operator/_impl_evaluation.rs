use crate::config::DivisionPolicy;
use crate::operator::{EvaluationError, NodeId, Operator, OperatorArena, OperatorNode};

/// One pending step of the post-order traversal in [`OperatorArena::evaluate`].
enum Step {
    /// Check the node and schedule its operands.
    Visit(NodeId),
    /// All operands are on the value stack; combine them.
    Reduce(NodeId),
}

impl OperatorArena {
    /// Evaluate the subtree rooted at `id`.
    ///
    /// Operands are evaluated left to right in attachment order, so `Subtraction` and
    /// `Division` are sensitive to the order of child elements in the document. A node
    /// with fewer operands than its [`Operator::arity`] fails with
    /// [`EvaluationError::MissingOperand`]; surplus operands are never read.
    ///
    /// Division by zero follows `division`: [`DivisionPolicy::Ieee`] yields an infinity
    /// or NaN, [`DivisionPolicy::Error`] fails with [`EvaluationError::DivisionByZero`].
    ///
    /// The traversal uses an explicit work stack, so the nesting depth of the tree is
    /// not limited by the call stack.
    pub fn evaluate(
        &self,
        id: NodeId,
        division: DivisionPolicy,
    ) -> Result<f64, EvaluationError> {
        let mut work = vec![Step::Visit(id)];
        let mut values: Vec<f64> = Vec::new();

        while let Some(step) = work.pop() {
            match step {
                Step::Visit(id) => {
                    let node = self.checked_node(id)?;
                    match node.operator {
                        Operator::Literal(value) => values.push(value),
                        Operator::Ignored => return Err(EvaluationError::Placeholder),
                        operator => {
                            work.push(Step::Reduce(id));
                            // Reversed, so that the first operand is popped first.
                            for operand in node.operands[..operator.arity()].iter().rev() {
                                work.push(Step::Visit(*operand));
                            }
                        }
                    }
                }
                Step::Reduce(id) => {
                    let operator = self.checked_node(id)?.operator;
                    let arguments = values.split_off(values.len() - operator.arity());
                    let value = match (operator, arguments.as_slice()) {
                        (Operator::PassThrough, [value]) => *value,
                        (Operator::Addition, [left, right]) => left + right,
                        (Operator::Subtraction, [left, right]) => left - right,
                        (Operator::Division, [left, right]) => {
                            if *right == 0.0 && division == DivisionPolicy::Error {
                                return Err(EvaluationError::DivisionByZero);
                            }
                            left / right
                        }
                        (Operator::Conditional, [left, right]) => {
                            if left > right { 1.0 } else { 0.0 }
                        }
                        _ => unreachable!("Evaluation invariant: Operands are reduced first."),
                    };
                    values.push(value);
                }
            }
        }

        Ok(values
            .pop()
            .expect("Invariant violation: Evaluation must produce a value."))
    }

    /// Look up a node and make sure it has enough operands for its arity.
    fn checked_node(&self, id: NodeId) -> Result<&OperatorNode, EvaluationError> {
        let node = self.get(id).ok_or(EvaluationError::UnknownNode(id))?;
        let expected = node.operator.arity();
        if node.operands.len() < expected {
            return Err(EvaluationError::MissingOperand {
                operator: node.operator.to_string(),
                expected,
                found: node.operands.len(),
            });
        }
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::DivisionPolicy;
    use crate::operator::{EvaluationError, NodeId, Operator, OperatorArena};

    /// Build `operator(int(left), int(right))` and return the arena with the root id.
    fn binary(operator: Operator, left: f64, right: f64) -> (OperatorArena, NodeId) {
        let mut arena = OperatorArena::new();
        let root = arena.push(operator);
        for value in [left, right] {
            let wrapper = arena.push(Operator::PassThrough);
            let literal = arena.push_literal(value);
            arena.add_operand(wrapper, literal);
            arena.add_operand(root, wrapper);
        }
        (arena, root)
    }

    fn eval(operator: Operator, left: f64, right: f64) -> Result<f64, EvaluationError> {
        let (arena, root) = binary(operator, left, right);
        arena.evaluate(root, DivisionPolicy::Ieee)
    }

    #[test]
    fn test_evaluate_arithmetic() {
        assert_eq!(eval(Operator::Addition, 3.0, 5.0), Ok(8.0));
        assert_eq!(eval(Operator::Subtraction, 1.0, 2.0), Ok(-1.0));
        assert_eq!(eval(Operator::Subtraction, 2.0, 1.0), Ok(1.0));
        assert_eq!(eval(Operator::Division, 1.0, 2.0), Ok(0.5));
        assert_eq!(eval(Operator::Division, 2.0, 1.0), Ok(2.0));
    }

    #[test]
    fn test_evaluate_conditional() {
        assert_eq!(eval(Operator::Conditional, 3.0, 2.0), Ok(1.0));
        assert_eq!(eval(Operator::Conditional, 2.0, 3.0), Ok(0.0));
        assert_eq!(eval(Operator::Conditional, 2.0, 2.0), Ok(0.0));
    }

    #[test]
    fn test_evaluate_pass_through() {
        for value in [0.0, -7.25, 1e9] {
            let mut arena = OperatorArena::new();
            let wrapper = arena.push(Operator::PassThrough);
            let literal = arena.push_literal(value);
            arena.add_operand(wrapper, literal);
            assert_eq!(arena.evaluate(wrapper, DivisionPolicy::Ieee), Ok(value));
        }
    }

    #[test]
    fn test_division_by_zero_policy() {
        let (arena, root) = binary(Operator::Division, 1.0, 0.0);
        assert_eq!(arena.evaluate(root, DivisionPolicy::Ieee), Ok(f64::INFINITY));
        assert_eq!(
            arena.evaluate(root, DivisionPolicy::Error),
            Err(EvaluationError::DivisionByZero)
        );

        let (arena, root) = binary(Operator::Division, 0.0, 0.0);
        assert!(arena.evaluate(root, DivisionPolicy::Ieee).unwrap().is_nan());
    }

    #[test]
    fn test_missing_operand() {
        let mut arena = OperatorArena::new();
        let root = arena.push(Operator::Addition);
        let literal = arena.push_literal(1.0);
        arena.add_operand(root, literal);

        let result = arena.evaluate(root, DivisionPolicy::Ieee);
        assert_eq!(
            result,
            Err(EvaluationError::MissingOperand {
                operator: "Addition".to_string(),
                expected: 2,
                found: 1,
            })
        );
    }

    #[test]
    fn test_surplus_operands_are_ignored() {
        let mut arena = OperatorArena::new();
        let root = arena.push(Operator::Subtraction);
        for value in [5.0, 2.0, 100.0] {
            let literal = arena.push_literal(value);
            arena.add_operand(root, literal);
        }
        assert_eq!(arena.evaluate(root, DivisionPolicy::Ieee), Ok(3.0));
    }

    #[test]
    fn test_deeply_nested_tree() {
        let mut arena = OperatorArena::new();
        let root = arena.push(Operator::PassThrough);
        let mut parent = root;
        for _ in 0..100_000 {
            let child = arena.push(Operator::PassThrough);
            arena.add_operand(parent, child);
            parent = child;
        }
        let literal = arena.push_literal(7.0);
        arena.add_operand(parent, literal);

        assert_eq!(arena.evaluate(root, DivisionPolicy::Ieee), Ok(7.0));
    }

    #[test]
    fn test_left_operand_error_is_reported_first() {
        // Addition(Addition(1), Division(1, 0)): the left operand is incomplete.
        let mut arena = OperatorArena::new();
        let root = arena.push(Operator::Addition);
        let left = arena.push(Operator::Addition);
        let one = arena.push_literal(1.0);
        arena.add_operand(left, one);
        let right = arena.push(Operator::Division);
        for value in [1.0, 0.0] {
            let literal = arena.push_literal(value);
            arena.add_operand(right, literal);
        }
        arena.add_operand(root, left);
        arena.add_operand(root, right);

        assert_eq!(
            arena.evaluate(root, DivisionPolicy::Error),
            Err(EvaluationError::MissingOperand {
                operator: "Addition".to_string(),
                expected: 2,
                found: 1,
            })
        );
    }

    #[test]
    fn test_placeholder_is_not_evaluated() {
        let mut arena = OperatorArena::new();
        let root = arena.push(Operator::Ignored);
        assert_eq!(
            arena.evaluate(root, DivisionPolicy::Ieee),
            Err(EvaluationError::Placeholder)
        );
    }
}
