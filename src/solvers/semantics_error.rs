use thiserror::Error;

/// Errors raised by the semantics engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticsError {
    /// The framework is too large for an exhaustive search.
    #[error("cannot enumerate the subsets of {n_arguments} arguments (at most {max} are allowed)")]
    FrameworkTooLarge {
        /// the number of arguments the search would have to combine
        n_arguments: usize,
        /// the maximal number of arguments an exhaustive search accepts
        max: usize,
    },
}
