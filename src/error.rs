//! Error types.
//!
//! Only malformed input is an error: invalid problem instances are
//! rejected at construction and invalid configurations before a run
//! starts. Infeasible states are scored, never reported.

/// Errors produced by problem construction and run setup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("capacity must be non-negative, got {0}")]
    NegativeCapacity(i64),

    #[error("item {index} has negative weight {weight}")]
    NegativeWeight { index: usize, weight: i64 },

    #[error("item {index} has negative value {value}")]
    NegativeValue { index: usize, value: i64 },

    #[error("got {weights} weights but {values} values")]
    LengthMismatch { weights: usize, values: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown algorithm `{0}`")]
    UnknownAlgorithm(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::NegativeWeight { index: 2, weight: -5 }.to_string(),
            "item 2 has negative weight -5"
        );
        assert_eq!(
            Error::LengthMismatch {
                weights: 3,
                values: 2
            }
            .to_string(),
            "got 3 weights but 2 values"
        );
        assert_eq!(
            Error::InvalidConfig("restarts_limit must be at least 1".into()).to_string(),
            "invalid configuration: restarts_limit must be at least 1"
        );
    }
}
