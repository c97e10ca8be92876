use thiserror::Error;

/// Result type alias using the sequence [`enum@Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Failures reported by the sequence engine.
///
/// Failures raised inside a transform, predicate or consumer are panics of the
/// caller's own code; they are never caught and reach the caller unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A negative element count was passed to `limit` or `skip`.
    #[error("`{op}` requires a non-negative count, got {count}")]
    NegativeCount {
        /// Name of the rejecting operation.
        op: &'static str,
        /// The rejected count.
        count: i64,
    },

    /// An element was pulled from a source that has no more elements.
    #[error("pulled from an exhausted source")]
    Exhausted,

    /// Two elements could not be ordered by their partial order.
    #[error("elements have no defined ordering relative to each other")]
    Incomparable,
}

impl Error {
    pub(crate) fn check_count(op: &'static str, count: i64) -> Result<usize> {
        match count < 0 {
            true => Err(Error::NegativeCount { op, count }),
            // counts beyond the address space cannot be reached anyway
            false => Ok(usize::try_from(count).unwrap_or(usize::MAX)),
        }
    }
}
