//! Error types for cave generation

use thiserror::Error;

/// Errors that can occur while configuring or running cave generation
///
/// None of these are retried internally: the same configuration and seed
/// reproduce the same failure, so callers vary one of them and run again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaveError {
    /// Configuration validation failed (rejected before any simulation runs)
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// No cell of the dominant cave has enough open neighbors to host the spawn
    #[error("no spawn candidate has more than {required_neighbors} open neighbors")]
    NoCandidate {
        /// Threshold that no cell exceeded
        required_neighbors: u8,
    },
    /// The simulation left no open cells at all
    #[error("map collapsed: no open cells remain after simulation")]
    EmptyMap,
}

/// Result type alias for cave generation
pub type Result<T> = std::result::Result<T, CaveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CaveError::InvalidConfig("width must be positive".into());
        assert_eq!(err.to_string(), "invalid configuration: width must be positive");

        let err = CaveError::NoCandidate { required_neighbors: 7 };
        assert!(err.to_string().contains("more than 7"));

        assert!(CaveError::EmptyMap.to_string().contains("no open cells"));
    }
}
