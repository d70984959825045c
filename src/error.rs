//! Error types for the vector addition model

use crate::types::{VectorId, VectorSetId};
use thiserror::Error;

/// Main error type for model operations
#[derive(Debug, Error, PartialEq)]
pub enum VectorAdditionError {
    /// A configuration value failed validation
    #[error("Invalid config value for '{key}': {reason}")]
    InvalidConfig { key: String, reason: String },

    /// The process-wide config was already installed
    #[error("Config already initialized")]
    ConfigAlreadyInitialized,

    /// No vector with this id in the set
    #[error("Unknown vector: {0}")]
    UnknownVector(VectorId),

    /// No vector set with this id in the graph
    #[error("Unknown vector set: {0}")]
    UnknownVectorSet(VectorSetId),

    /// No scene with this key on the screen
    #[error("Unknown scene: {0}")]
    UnknownScene(String),

    /// Every slot of a vector pool is in use
    #[error("Vector pool exhausted: all {capacity} vectors are in use")]
    PoolExhausted { capacity: usize },

    /// Operation not allowed in the vector's current state
    #[error("Vector {id} is {actual}, expected {expected}")]
    InvalidState {
        id: VectorId,
        expected: String,
        actual: String,
    },

    /// A numeric control value outside its range
    #[error("{name} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The caller attempted something the model never allows
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Result type alias for model operations
pub type Result<T> = std::result::Result<T, VectorAdditionError>;

impl VectorAdditionError {
    pub(crate) fn invalid_config(key: impl Into<String>, reason: impl Into<String>) -> Self {
        VectorAdditionError::InvalidConfig {
            key: key.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        VectorAdditionError::InvariantViolation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VectorAdditionError::invalid_config("vectorHeadWidth", "must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid config value for 'vectorHeadWidth': must be positive"
        );
    }

    #[test]
    fn test_out_of_range_display() {
        let err = VectorAdditionError::OutOfRange {
            name: "coefficient",
            value: 7.0,
            min: -5.0,
            max: 5.0,
        };
        assert_eq!(err.to_string(), "coefficient = 7 is outside [-5, 5]");
    }

    #[test]
    fn test_state_error_display() {
        let err = VectorAdditionError::InvalidState {
            id: VectorId::new(2),
            expected: "active".to_string(),
            actual: "inactive".to_string(),
        };
        assert!(err.to_string().contains("#2"));
        assert!(err.to_string().contains("inactive"));
    }

    #[test]
    fn test_pool_exhausted() {
        let err = VectorAdditionError::PoolExhausted { capacity: 10 };
        assert!(err.to_string().contains("10"));
    }
}
