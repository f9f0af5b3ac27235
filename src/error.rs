//! Errors surfaced by consuming sequences.
use thiserror::Error;

/// Collection stopped at the first element carrying an error.
///
/// Returned by [`collect_err`][crate::fold::collect_err]. Holds the values collected strictly
/// before the failing element, and its error.
#[derive(Debug, Error)]
#[error("collection halted after {} values", .collected.len())]
pub struct Halted<A, E> {
    collected: Vec<A>,
    #[source]
    error: E,
}

impl<A, E> Halted<A, E> {
    pub(crate) fn new(collected: Vec<A>, error: E) -> Halted<A, E> {
        Halted { collected, error }
    }

    /// Values collected before the error.
    pub fn collected(&self) -> &[A] {
        &self.collected
    }

    /// The error that stopped the collection.
    pub fn error(&self) -> &E {
        &self.error
    }

    pub fn into_parts(self) -> (Vec<A>, E) {
        (self.collected, self.error)
    }
}
