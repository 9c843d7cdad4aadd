use std::error::Error as StdError;

/// Error reporter is any object that can collect non-fatal conditions found while a
/// document is being evaluated (e.g. unrecognized elements that were skipped).
///
/// Fatal conditions are returned as `Err` values instead; a reporter only ever sees
/// problems that did not stop the evaluation.
pub trait ErrorReporter<E: StdError> {
    /// Report an error into this [`ErrorReporter`].
    fn report<E2: Into<E>>(&mut self, error: E2);
}

/// A simple [`ErrorReporter`] implementation that collects all errors into a vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VecReporter<E: StdError> {
    errors: Vec<E>,
}

impl<E: StdError> Default for VecReporter<E> {
    fn default() -> Self {
        VecReporter { errors: Vec::new() }
    }
}

impl<E: StdError> VecReporter<E> {
    #[must_use]
    pub fn errors(&self) -> &[E] {
        &self.errors
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Move all collected errors out, leaving the reporter empty.
    pub fn take(&mut self) -> Vec<E> {
        std::mem::take(&mut self.errors)
    }
}

impl<E: StdError> ErrorReporter<E> for VecReporter<E> {
    fn report<X: Into<E>>(&mut self, error: X) {
        self.errors.push(error.into());
    }
}
