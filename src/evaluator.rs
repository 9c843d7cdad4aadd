use crate::builder::{StackBuilder, UnrecognizedElement};
use crate::config::EvaluatorConfig;
use crate::xml_source::{DocumentError, drive};
use std::io::Read;

/// Outcome of one successfully evaluated document.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub value: f64,
    /// Unrecognized elements that were skipped while evaluating the document.
    pub warnings: Vec<UnrecognizedElement>,
}

/// Evaluates XML documents one after another with a single [`StackBuilder`].
///
/// A failed document is discarded completely, so the next call always starts from an
/// empty stack.
#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    builder: StackBuilder,
}

impl Evaluator {
    #[must_use]
    pub fn new(config: EvaluatorConfig) -> Evaluator {
        Evaluator {
            builder: StackBuilder::new(config),
        }
    }

    #[must_use]
    pub fn config(&self) -> &EvaluatorConfig {
        self.builder.config()
    }

    /// Evaluate one document stored in a string.
    pub fn evaluate_str(&mut self, document: &str) -> Result<Evaluation, DocumentError> {
        self.evaluate_reader(document.as_bytes())
    }

    /// Evaluate one document read from `source`.
    pub fn evaluate_reader<R: Read>(&mut self, source: R) -> Result<Evaluation, DocumentError> {
        match drive(source, &mut self.builder) {
            Ok(value) => Ok(Evaluation {
                value,
                warnings: self.builder.take_warnings(),
            }),
            Err(error) => {
                self.builder.reset();
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Evaluator;
    use crate::builder::{BuilderError, UnrecognizedElement};
    use crate::config::{DivisionPolicy, EvaluatorConfig, UnrecognizedElementPolicy};
    use crate::operator::EvaluationError;
    use crate::samples::SAMPLE_DOCUMENTS;
    use crate::xml_source::DocumentError;

    #[test]
    fn test_sample_documents_in_sequence() {
        let mut evaluator = Evaluator::default();
        let results = SAMPLE_DOCUMENTS
            .iter()
            .map(|sample| evaluator.evaluate_str(sample.document).unwrap().value)
            .collect::<Vec<_>>();
        assert_eq!(results, vec![-1.0, 1.0, 0.5, 2.0, 8.0, 1.2]);
    }

    #[test]
    fn test_conditional_document() {
        let mut evaluator = Evaluator::default();
        let document = "<Conditional><int>4</int><int>3.5</int></Conditional>";
        assert_eq!(evaluator.evaluate_str(document).unwrap().value, 1.0);
        let document = "<Conditional><int>3.5</int><int>3.5</int></Conditional>";
        assert_eq!(evaluator.evaluate_str(document).unwrap().value, 0.0);
    }

    #[test]
    fn test_warnings_are_per_document() {
        let mut evaluator = Evaluator::default();
        let document = "<Addition><Note/><int>1</int><int>2</int></Addition>";
        let evaluation = evaluator.evaluate_str(document).unwrap();
        assert_eq!(evaluation.value, 3.0);
        assert_eq!(
            evaluation.warnings,
            vec![UnrecognizedElement {
                name: "Note".to_string(),
                depth: 1,
            }]
        );

        let evaluation = evaluator.evaluate_str("<int>5</int>").unwrap();
        assert!(evaluation.warnings.is_empty());
    }

    #[test]
    fn test_deeply_nested_document() {
        let depth = 12_000;
        let document = format!("{}7{}", "<int>".repeat(depth), "</int>".repeat(depth));
        let mut evaluator = Evaluator::default();
        assert_eq!(evaluator.evaluate_str(&document).unwrap().value, 7.0);
    }

    #[test]
    fn test_trailing_root_does_not_replace_result() {
        let mut evaluator = Evaluator::default();
        let result =
            evaluator.evaluate_str("<Addition><int>1</int><int>2</int></Addition><int>9</int>");
        assert!(matches!(
            result,
            Err(DocumentError::TrailingContent { value }) if value == 3.0
        ));
        assert_eq!(evaluator.evaluate_str("<int>4</int>").unwrap().value, 4.0);
    }

    #[test]
    fn test_recovery_after_failure() {
        let config = EvaluatorConfig {
            unrecognized_element: UnrecognizedElementPolicy::Fail,
            division_by_zero: DivisionPolicy::Error,
        };
        let mut evaluator = Evaluator::new(config);

        let result = evaluator.evaluate_str("<Addition><Note/><int>1</int></Addition>");
        assert!(matches!(
            result,
            Err(DocumentError::Builder(BuilderError::UnrecognizedElement(_)))
        ));

        let result = evaluator.evaluate_str("<Division><int>1</int><int>0</int></Division>");
        assert!(matches!(
            result,
            Err(DocumentError::Builder(BuilderError::Evaluation(
                EvaluationError::DivisionByZero
            )))
        ));

        let result = evaluator.evaluate_str("<Addition><int>1</int>");
        assert!(matches!(result, Err(DocumentError::Markup(_))));

        let evaluation = evaluator
            .evaluate_str("<Addition><int>1</int><int>2</int></Addition>")
            .unwrap();
        assert_eq!(evaluation.value, 3.0);
    }
}
