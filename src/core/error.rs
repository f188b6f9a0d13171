//! Error types for the solver
//!
//! Every fallible library operation returns [`SolverError`]. The binary wraps
//! these in `anyhow` at the top level.

use thiserror::Error;

/// Errors produced while configuring or playing a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Feedback history is internally inconsistent: no pattern satisfies it
    #[error("contradictory feedback: no pattern is consistent with the {trials} answers given")]
    ContradictoryFeedback { trials: usize },

    /// The pattern space does not fit the identifier range or the candidate bitset limit
    #[error(
        "{color_number}^{pattern_length} patterns exceeds the supported maximum of {limit}"
    )]
    CapacityOverflow {
        pattern_length: u32,
        color_number: u32,
        limit: u64,
    },

    /// Precomputing every pattern would need more memory than allowed
    #[error("cannot precompute {entries} pattern colors (limit is {limit})")]
    MaterializationTooLarge { entries: u64, limit: u64 },

    /// Zero pegs, zero colors, or too many colors
    #[error("invalid game dimensions: {0}")]
    InvalidDimensions(String),

    /// A pattern supplied from outside has the wrong length or an unknown color
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    /// Benchmark or session settings that cannot be run
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// A session operation was called in a state that does not allow it
    #[error("invalid session state: {0}")]
    InvalidState(&'static str),
}

/// Type alias for Result with [`SolverError`]
pub type Result<T> = std::result::Result<T, SolverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contradictory_feedback_message() {
        let err = SolverError::ContradictoryFeedback { trials: 3 };
        assert_eq!(
            err.to_string(),
            "contradictory feedback: no pattern is consistent with the 3 answers given"
        );
    }

    #[test]
    fn capacity_overflow_message_names_dimensions() {
        let err = SolverError::CapacityOverflow {
            pattern_length: 20,
            color_number: 10,
            limit: 1 << 32,
        };
        let msg = err.to_string();
        assert!(msg.contains("10^20"));
        assert!(msg.contains("4294967296"));
    }
}
