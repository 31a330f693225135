//! Error types for tolerance interval estimation
//!
//! Provides a unified error type for all tolerance-stats crates.

use thiserror::Error;

/// Core error type for tolerance interval operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Order-statistic ranks fall outside `[1, n]` for the requested coverage
    #[error(
        "Insufficient sample size: n = {n} gives ranks L = {lower_rank}, U = {upper_rank} \
         (valid range is [1, {n}]) for proportion {proportion} at confidence {confidence}"
    )]
    InsufficientSampleSize {
        n: usize,
        lower_rank: i64,
        upper_rank: i64,
        proportion: f64,
        confidence: f64,
    },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a probability outside the open unit interval
    pub fn invalid_probability(name: &str, value: f64) -> Self {
        Self::InvalidParameter(format!("{name} {value} must be in (0, 1)"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Whether this error reports a bad argument rather than a numerical failure.
    ///
    /// `InsufficientSampleSize` counts as a bad argument: the sample is too
    /// small for the requested proportion and confidence.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter(_)
                | Self::InvalidInput(_)
                | Self::InsufficientData { .. }
                | Self::InsufficientSampleSize { .. }
        )
    }
}
