//! Error types for confidence interval estimation
//!
//! Provides a unified error type for all dkw-stats crates.

use thiserror::Error;

/// Core error type for confidence interval calculations
///
/// All variants describe invalid input; degenerate numeric cases such as a
/// zero total count are not errors and instead yield undefined bounds.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Confidence level missing, non-finite, or outside [0.5, 1.0]
    #[error("Invalid confidence level: {0} (must be between 0.5 and 1.0)")]
    InvalidConfidenceLevel(f64),

    /// A histogram value could not be used as a finite number
    #[error("Invalid data value: {0}")]
    InvalidDataValue(f64),

    /// A histogram frequency is negative
    #[error("Invalid frequency for value {value}: {frequency}")]
    InvalidFrequency { value: f64, frequency: i64 },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for an out-of-range or non-finite confidence level
    pub fn invalid_level(level: f64) -> Self {
        Self::InvalidConfidenceLevel(level)
    }

    /// Create an error for a NaN or infinite histogram value
    pub fn invalid_value(value: f64) -> Self {
        Self::InvalidDataValue(value)
    }

    /// Create an error for a negative frequency
    pub fn invalid_frequency(value: f64, frequency: i64) -> Self {
        Self::InvalidFrequency { value, frequency }
    }
}
