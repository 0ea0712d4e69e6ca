//! Error types for the aeolus-sim crate.

/// Error type for all fallible operations in the aeolus-sim crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SimError {
    /// Returned when an operation is invoked before `initialize`.
    #[error("{op} called before initialize")]
    Uninitialized {
        /// Name of the operation that was attempted.
        op: &'static str,
    },

    /// Returned when a state name cannot be parsed.
    #[error("unknown weather state: {name:?} (expected sunny, cloudy, or rainy)")]
    UnknownState {
        /// The unrecognised input.
        name: String,
    },

    /// Returned when a numeric state encoding is out of range.
    #[error("invalid state index: {index} (must be 0..=2)")]
    InvalidStateIndex {
        /// The invalid index value.
        index: usize,
    },

    /// Returned when a transition matrix entry or row is not a valid probability.
    #[error("invalid probability: {reason}")]
    InvalidProbability {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a simulator configuration is invalid.
    #[error("invalid config: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
