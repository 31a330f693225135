//! Shared interface of the tolerance interval estimators

use crate::types::ToleranceInterval;
use tolerance_core::Result;

/// A method that turns a sample into a tolerance interval
///
/// Implementations are stateless with respect to the sample: calling twice
/// with the same arguments yields the same interval.
pub trait ToleranceIntervalEstimator {
    /// Compute the interval expected to contain `proportion` of the
    /// population with probability `confidence`
    fn tolerance_interval(
        &self,
        sample: &[f64],
        proportion: f64,
        confidence: f64,
    ) -> Result<ToleranceInterval>;

    /// Method name for documentation
    fn name(&self) -> &'static str;
}
