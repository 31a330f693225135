//! Common types for tolerance intervals

use serde::{Deserialize, Serialize};
use std::fmt;
use tolerance_core::{utils::validate_probability, Result};

/// A tolerance interval with lower and upper bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToleranceInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
}

impl ToleranceInterval {
    /// Create a new tolerance interval
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Width of the tolerance interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Midpoint of the interval
    pub fn center(&self) -> f64 {
        0.5 * (self.lower + self.upper)
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// The bounds as a `(lower, upper)` pair
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }
}

impl From<ToleranceInterval> for (f64, f64) {
    fn from(interval: ToleranceInterval) -> Self {
        interval.as_tuple()
    }
}

impl fmt::Display for ToleranceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.4}, {:.4}]", self.lower, self.upper)
    }
}

/// Validated coverage requirement: population proportion and confidence level
///
/// Both values must lie strictly inside (0, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coverage {
    proportion: f64,
    confidence: f64,
}

impl Coverage {
    /// Validate and create a coverage requirement
    pub fn new(proportion: f64, confidence: f64) -> Result<Self> {
        Ok(Self {
            proportion: validate_probability("proportion", proportion)?,
            confidence: validate_probability("confidence", confidence)?,
        })
    }

    /// Fraction of the population the interval must contain
    pub fn proportion(&self) -> f64 {
        self.proportion
    }

    /// Probability that the interval achieves the proportion
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Get the alpha level (1 - confidence)
    pub fn alpha(&self) -> f64 {
        1.0 - self.confidence
    }
}

impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% coverage @ {:.1}% confidence",
            self.proportion * 100.0,
            self.confidence * 100.0
        )
    }
}
