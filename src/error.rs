use thiserror::Error;

/// Failure of a fallible benchmark body, tagged with the evaluation on which it happened.
///
/// `evaluation` is 1-based: a body that fails on its first call reports `evaluation == 1`.
/// The elapsed time of the aborted loop is not reported.
#[derive(Debug, Error)]
#[error("benchmark body failed on evaluation {evaluation} of {eval_count}")]
pub struct EvalError<E> {
    pub evaluation: u64,
    pub eval_count: i64,
    #[source]
    pub source: E,
}

impl<E> EvalError<E> {
    /// Discards the evaluation context, returning the body's own error.
    pub fn into_source(self) -> E {
        self.source
    }
}
